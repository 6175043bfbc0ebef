pub mod accessories_images_card;
pub mod table;
pub mod ui;

pub use accessories_images_card::AccessoriesImagesCard;
