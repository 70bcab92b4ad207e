mod content_type;
mod image_id;
mod image_name;

pub use content_type::ImageContentType;
pub use image_id::ImageId;
pub use image_name::ImageName;
