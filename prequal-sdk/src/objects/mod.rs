pub mod merchant;

pub use merchant::{
    FieldError, MerchantConfigurationRequest, MerchantConfigurationResponse,
    MerchantConfigurationView,
};
