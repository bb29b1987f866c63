use serde::{Deserialize, Deserializer};

/// Decodes `null` the same way as an absent key.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A Yoda data package description.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MetadataDocument {
    #[serde(rename = "links", deserialize_with = "nullable")]
    pub links: Vec<Link>,
    #[serde(rename = "Discipline", deserialize_with = "nullable")]
    pub discipline: Vec<String>,
    #[serde(rename = "Language", deserialize_with = "nullable")]
    pub language: String,
    #[serde(rename = "Collected", deserialize_with = "nullable")]
    pub collected: DateRange,
    #[serde(rename = "Covered_Geolocation_Place", deserialize_with = "nullable")]
    pub covered_geolocation_place: Vec<String>,
    #[serde(rename = "Covered_Period", deserialize_with = "nullable")]
    pub covered_period: DateRange,
    #[serde(rename = "Tag", deserialize_with = "nullable")]
    pub tag: Vec<String>,
    #[serde(rename = "Related_Datapackage", deserialize_with = "nullable")]
    pub related_datapackage: Vec<RelatedDatapackage>,
    /// Retention period; the unit (usually years) is not enforced.
    #[serde(rename = "Retention_Period", deserialize_with = "nullable")]
    pub retention_period: i64,
    #[serde(rename = "Data_Type", deserialize_with = "nullable")]
    pub data_type: String,
    #[serde(rename = "Funding_Reference", deserialize_with = "nullable")]
    pub funding_reference: Vec<FundingReference>,
    #[serde(rename = "Creator", deserialize_with = "nullable")]
    pub creator: Vec<Creator>,
    #[serde(rename = "Contributor", deserialize_with = "nullable")]
    pub contributor: Vec<Contributor>,
    #[serde(rename = "Data_Access_Restriction", deserialize_with = "nullable")]
    pub data_access_restriction: String,
    #[serde(rename = "Title", deserialize_with = "nullable")]
    pub title: String,
    #[serde(rename = "Description", deserialize_with = "nullable")]
    pub description: String,
    #[serde(rename = "Version", deserialize_with = "nullable")]
    pub version: String,
    #[serde(rename = "Retention_Information", deserialize_with = "nullable")]
    pub retention_information: String,
    #[serde(rename = "Embargo_End_Date", deserialize_with = "nullable")]
    pub embargo_end_date: String,
    #[serde(rename = "Data_Classification", deserialize_with = "nullable")]
    pub data_classification: String,
    #[serde(rename = "Collection_Name", deserialize_with = "nullable")]
    pub collection_name: String,
    #[serde(rename = "Remarks", deserialize_with = "nullable")]
    pub remarks: String,
    #[serde(rename = "License", deserialize_with = "nullable")]
    pub license: String,
}

/// A hyperlink attached to the package (`rel` + `href`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Link {
    #[serde(deserialize_with = "nullable")]
    pub rel: String,
    #[serde(deserialize_with = "nullable")]
    pub href: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DateRange {
    #[serde(rename = "Start_Date", deserialize_with = "nullable")]
    pub start_date: String,
    #[serde(rename = "End_Date", deserialize_with = "nullable")]
    pub end_date: String,
}

impl DateRange {
    pub fn is_empty(&self) -> bool {
        self.start_date.is_empty() && self.end_date.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PersistentIdentifier {
    #[serde(rename = "Identifier_Scheme", deserialize_with = "nullable")]
    pub identifier_scheme: String,
    #[serde(rename = "Identifier", deserialize_with = "nullable")]
    pub identifier: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RelatedDatapackage {
    #[serde(rename = "Persistent_Identifier", deserialize_with = "nullable")]
    pub persistent_identifier: PersistentIdentifier,
    #[serde(rename = "Relation_Type", deserialize_with = "nullable")]
    pub relation_type: String,
    #[serde(rename = "Title", deserialize_with = "nullable")]
    pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FundingReference {
    #[serde(rename = "Funder_Name", deserialize_with = "nullable")]
    pub funder_name: String,
    #[serde(rename = "Award_Number", deserialize_with = "nullable")]
    pub award_number: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PersonName {
    #[serde(rename = "Given_Name", deserialize_with = "nullable")]
    pub given_name: String,
    #[serde(rename = "Family_Name", deserialize_with = "nullable")]
    pub family_name: String,
}

impl PersonName {
    /// "Given Family", without stray whitespace when either part is missing.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.given_name.trim(), self.family_name.trim())
            .trim()
            .to_string()
    }
}

/// An external person identifier such as an ORCID.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PersonIdentifier {
    #[serde(rename = "Name_Identifier_Scheme", deserialize_with = "nullable")]
    pub name_identifier_scheme: String,
    #[serde(rename = "Name_Identifier", deserialize_with = "nullable")]
    pub name_identifier: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Creator {
    #[serde(rename = "Name", deserialize_with = "nullable")]
    pub name: PersonName,
    #[serde(rename = "Affiliation", deserialize_with = "nullable")]
    pub affiliation: Vec<String>,
    #[serde(rename = "Person_Identifier", deserialize_with = "nullable")]
    pub person_identifier: Vec<PersonIdentifier>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Contributor {
    #[serde(rename = "Name", deserialize_with = "nullable")]
    pub name: PersonName,
    #[serde(rename = "Affiliation", deserialize_with = "nullable")]
    pub affiliation: Vec<String>,
    #[serde(rename = "Person_Identifier", deserialize_with = "nullable")]
    pub person_identifier: Vec<PersonIdentifier>,
    #[serde(rename = "Contributor_Type", deserialize_with = "nullable")]
    pub contributor_type: String,
}
