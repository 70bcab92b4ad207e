mod delete_image;
mod get_image;
mod list_images;
mod reconcile_images;
mod upload_image;

pub use delete_image::DeleteImageUseCase;
pub use get_image::GetImageUseCase;
pub use list_images::ListImagesUseCase;
pub use reconcile_images::{ReconcileImagesUseCase, ReconcileOptions, ReconcileReport};
pub use upload_image::UploadImageUseCase;
