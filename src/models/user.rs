//! Natural and legal users, plus their SCA state.

use serde::{Deserialize, Serialize};

use super::common::{Address, Entity, impl_entity, null_as_default};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PersonType {
    Natural,
    Legal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserCategory {
    Payer,
    Owner,
    Platform,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LegalPersonType {
    Business,
    Organization,
    Soletrader,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KycLevel {
    Light,
    Regular,
    #[serde(other)]
    Unknown,
}

// ============================================================================
// Users
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserNatural {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,

    /// Unix timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_of_residence: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub income_range: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number_country: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_category: Option<UserCategory>,

    #[serde(rename = "KYCLevel", default, skip_serializing_if = "Option::is_none")]
    pub kyc_level: Option<KycLevel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terms_and_conditions_accepted: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terms_and_conditions_accepted_date: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserLegal {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_person_type: Option<LegalPersonType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headquarters_address: Option<Address>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_representative_first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_representative_last_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_representative_email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_representative_birthday: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_representative_nationality: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_representative_country_of_residence: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_representative_address: Option<Address>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_category: Option<UserCategory>,

    #[serde(rename = "KYCLevel", default, skip_serializing_if = "Option::is_none")]
    pub kyc_level: Option<KycLevel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terms_and_conditions_accepted: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terms_and_conditions_accepted_date: Option<i64>,
}

impl_entity!(UserNatural, UserLegal);

/// A user of either kind, discriminated by `PersonType`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "PersonType", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum User {
    Natural(UserNatural),
    Legal(UserLegal),
}

impl User {
    pub fn person_type(&self) -> PersonType {
        match self {
            User::Natural(_) => PersonType::Natural,
            User::Legal(_) => PersonType::Legal,
        }
    }

    pub fn email(&self) -> Option<&str> {
        match self {
            User::Natural(user) => user.email.as_deref(),
            User::Legal(user) => user.email.as_deref(),
        }
    }

    pub fn as_natural(&self) -> Option<&UserNatural> {
        match self {
            User::Natural(user) => Some(user),
            User::Legal(_) => None,
        }
    }

    pub fn as_legal(&self) -> Option<&UserLegal> {
        match self {
            User::Legal(user) => Some(user),
            User::Natural(_) => None,
        }
    }
}

impl Entity for User {
    fn id(&self) -> Option<&str> {
        match self {
            User::Natural(user) => user.id(),
            User::Legal(user) => user.id(),
        }
    }

    fn tag(&self) -> Option<&str> {
        match self {
            User::Natural(user) => user.tag(),
            User::Legal(user) => user.tag(),
        }
    }

    fn creation_date(&self) -> Option<i64> {
        match self {
            User::Natural(user) => user.creation_date(),
            User::Legal(user) => user.creation_date(),
        }
    }
}

impl From<UserNatural> for User {
    fn from(user: UserNatural) -> Self {
        User::Natural(user)
    }
}

impl From<UserLegal> for User {
    fn from(user: UserLegal) -> Self {
        User::Legal(user)
    }
}

// ============================================================================
// Strong customer authentication
// ============================================================================

/// Consent state per scope, as reported by the API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConsentScope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_information_update: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_registration: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_account_information: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScaStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_status: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub is_enrolled: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_enrollment_date: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_consent_collection_date: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consent_scope: Option<ConsentScope>,
}

/// Hosted page the user must visit to finish an SCA step
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PendingUserAction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserEnrollmentResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_user_action: Option<PendingUserAction>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserConsent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_user_action: Option<PendingUserAction>,
}
