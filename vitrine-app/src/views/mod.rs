pub mod cards;
pub mod contact;
pub mod controls;
pub mod drawer;
pub mod header;
pub mod home;
pub mod studio;
pub mod testimonials;
pub mod work;
