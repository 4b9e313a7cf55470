pub mod observation;
pub mod site;
