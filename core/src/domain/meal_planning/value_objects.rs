use crate::domain::{
    common::entities::app_errors::CoreError, inventory::ExpiryDates,
    meal_planning::entities::UserProfile,
};

/// An uploaded receipt photo whose format has been sniffed from its header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptImage {
    pub data: Vec<u8>,
    pub mime_type: &'static str,
}

impl ReceiptImage {
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, CoreError> {
        if data.is_empty() {
            return Err(CoreError::InvalidImage("image is empty".to_string()));
        }

        let format = image::guess_format(&data)
            .map_err(|_| CoreError::InvalidImage("unrecognized image format".to_string()))?;

        Ok(Self {
            data,
            mime_type: format.to_mime_type(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct ExtractItemsInput {
    pub image: ReceiptImage,
}

#[derive(Debug, Clone, Default)]
pub struct GenerateMealPlanInput {
    pub profile: UserProfile,
    pub item_list: Vec<String>,
    pub expiry_dates: ExpiryDates,
}

#[derive(Debug, Clone, Default)]
pub struct GenerateRecipeInput {
    pub meal: Option<String>,
    pub item_list: Vec<String>,
    pub expiry_dates: ExpiryDates,
}
