use super::enums::{Province, ResourceCategory};

/// A clinic or helpline listed in the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryResource {
    pub id: &'static str,
    pub name: &'static str,
    pub address: &'static str,
    pub province: Province,
    pub category: ResourceCategory,
    pub kind: &'static str,
    pub hours: Option<&'static str>,
    pub services: &'static str,
    pub phone: &'static str,
    pub is_helpline: bool,
}
