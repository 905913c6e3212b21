pub mod admin;
pub mod admin_cars;
pub mod admin_news;
pub mod car_details;
pub mod catalog;
pub mod favorites;
pub mod home;
pub mod login;
pub mod news;

pub use admin::{admin_page, admin_users_page, AdminVm};
pub use admin_cars::{admin_cars_page, car_edit_page};
pub use admin_news::{admin_news_page, news_edit_page};
pub use car_details::{car_details_page, lead_received_page, CarDetailsVm};
pub use catalog::{catalog_page, CatalogVm};
pub use favorites::favorites_page;
pub use home::home_page;
pub use login::{login_page, register_page};
pub use news::{news_article_page, news_page};
