use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A company as returned by the directory. Every field is optional on the
/// wire; unknown fields are ignored.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct CompanyRecord {
    pub inn: Option<String>,
    pub kpp: Option<String>,
    pub ogrn: Option<String>,
    pub okpo: Option<String>,
    pub okved: Option<String>,
    pub name: Option<CompanyName>,
    pub address: Option<CompanyAddress>,
    pub management: Option<Management>,
    pub state: Option<CompanyState>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct CompanyName {
    pub full_with_opf: Option<String>,
    pub short_with_opf: Option<String>,
    pub full: Option<String>,
    pub short: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct CompanyAddress {
    pub value: Option<String>,
    pub unrestricted_value: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Management {
    pub name: Option<String>,
    pub post: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct CompanyState {
    pub status: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumString, strum::IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CompanyStatus {
    Active,
    Liquidating,
    Liquidated,
    Bankrupt,
    Reorganizing,
    /// A status this crate does not know about.
    Unknown,
}

impl CompanyStatus {
    /// The company no longer operates and will not come back.
    pub fn is_terminal(self) -> bool {
        matches!(self, CompanyStatus::Liquidated | CompanyStatus::Bankrupt)
    }
}

impl CompanyRecord {
    /// Full name with the legal form, falling back to the bare full name.
    pub fn display_name(&self) -> Option<&str> {
        let name = self.name.as_ref()?;
        name.full_with_opf.as_deref().or(name.full.as_deref())
    }

    pub fn short_name(&self) -> Option<&str> {
        let name = self.name.as_ref()?;
        name.short_with_opf.as_deref().or(name.short.as_deref())
    }

    /// Unrestricted address (with postal code and region), falling back to the
    /// short form.
    pub fn legal_address(&self) -> Option<&str> {
        let address = self.address.as_ref()?;
        address
            .unrestricted_value
            .as_deref()
            .or(address.value.as_deref())
    }

    pub fn manager(&self) -> Option<&Management> {
        self.management.as_ref().filter(|m| m.name.is_some())
    }

    /// `None` when the record carries no status at all.
    pub fn status(&self) -> Option<CompanyStatus> {
        let status = self.state.as_ref()?.status.as_deref()?;
        Some(CompanyStatus::from_str(status).unwrap_or(CompanyStatus::Unknown))
    }
}
