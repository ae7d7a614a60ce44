// tests/support/builders.rs
use catalog_core::application::commands::categories::CreateCategoryCommand;
use catalog_core::application::commands::products::ProductInput;
use catalog_core::application::ports::storage::UploadedImage;

pub struct CategoryBuilder {
    name: String,
    description: String,
    image_url: String,
}

impl CategoryBuilder {
    pub fn new() -> Self {
        Self {
            name: "Garden Tools".into(),
            description: String::new(),
            image_url: String::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    pub fn build(self) -> CreateCategoryCommand {
        CreateCategoryCommand {
            name: self.name,
            description: self.description,
            image_url: self.image_url,
        }
    }
}

pub struct ProductBuilder {
    input: ProductInput,
}

impl ProductBuilder {
    pub fn new(category_id: i64) -> Self {
        Self {
            input: ProductInput {
                name: "Steel Spade".into(),
                description: "Forged steel spade with ash handle".into(),
                price: "45".into(),
                number_in_stock: "12".into(),
                image_url: String::new(),
                category: category_id.to_string(),
                photo: None,
            },
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.input.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.input.description = description.into();
        self
    }

    pub fn price(mut self, price: impl Into<String>) -> Self {
        self.input.price = price.into();
        self
    }

    pub fn stock(mut self, stock: impl Into<String>) -> Self {
        self.input.number_in_stock = stock.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.input.category = category.into();
        self
    }

    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.input.image_url = image_url.into();
        self
    }

    pub fn photo(mut self, content_type: &str, bytes: &'static [u8]) -> Self {
        self.input.photo = Some(UploadedImage {
            file_name: Some("photo.png".into()),
            content_type: Some(content_type.into()),
            bytes: bytes::Bytes::from_static(bytes),
        });
        self
    }

    /// A photo part as a client might send it, with no content type declared.
    pub fn untyped_photo(mut self, file_name: &str, bytes: &'static [u8]) -> Self {
        self.input.photo = Some(UploadedImage {
            file_name: Some(file_name.into()),
            content_type: None,
            bytes: bytes::Bytes::from_static(bytes),
        });
        self
    }

    pub fn build(self) -> ProductInput {
        self.input
    }
}
