pub mod about;
pub mod action;
pub mod contact_message;
pub mod experience;
pub mod faq;
pub mod hero;
pub mod option_fields;
pub mod project;
pub mod testimonial;
