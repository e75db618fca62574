pub mod diagnosis;
pub mod image;
pub mod note;
pub mod plan;
pub mod procedures;
pub mod referral_template;
pub mod template;
