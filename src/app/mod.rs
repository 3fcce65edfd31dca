pub mod form;

pub use form::FormRequest;
