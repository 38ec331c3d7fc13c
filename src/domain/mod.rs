// Domain model for resource URI templates and typed parameter schemas

pub mod schema;
pub mod template;
