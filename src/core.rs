pub mod catalog;
pub mod continuation;
pub mod option;
pub mod pricing;
pub mod selection;
pub mod step;
pub mod visibility;
