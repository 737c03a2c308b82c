//! Typed result rows returned by the election dataset.
//!
//! Field names on the wire follow the variable names of the underlying
//! queries (`cityURI`, `familyName`, ...), which clients already consume.

use serde::{Deserialize, Serialize};

use crate::term::Term;

/// The location classification excluded from every city and list query.
pub const RESERVED_CLASSIFICATION: &str = "OCMW";

// ─── Cities ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityRow {
  #[serde(rename = "cityURI")]
  pub city_uri:       Term,
  #[serde(rename = "cityName")]
  pub city_name:      Term,
  /// The kind of location, e.g. "Gemeente", "Provincie", "District".
  #[serde(rename = "locationLabel")]
  pub location_label: Term,
}

impl CityRow {
  pub fn is_reserved(&self) -> bool {
    self.location_label.value() == RESERVED_CLASSIFICATION
  }
}

// ─── Candidate lists ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateListRow {
  #[serde(rename = "listURI")]
  pub list_uri:  Term,
  #[serde(rename = "listName")]
  pub list_name: Term,
}

// ─── Candidates ──────────────────────────────────────────────────────────────

/// A member of a candidate list, optionally carrying a linked WebID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRow {
  #[serde(rename = "personURI")]
  pub person_uri:  Term,
  pub name:        Term,
  #[serde(rename = "familyName")]
  pub family_name: Term,
  /// Only present when a local record links this person to a WebID.
  #[serde(rename = "webID", default, skip_serializing_if = "Option::is_none")]
  pub web_id:      Option<Term>,
}

// ─── Memberships ─────────────────────────────────────────────────────────────

/// One list a person campaigned on, with the list's ballot number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipRow {
  pub name:        Term,
  #[serde(rename = "familyName")]
  pub family_name: Term,
  #[serde(rename = "listURI")]
  pub list_uri:    Term,
  #[serde(rename = "listName")]
  pub list_name:   Term,
  #[serde(rename = "trackingNb")]
  pub tracking_nb: Term,
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn candidate_without_web_id_omits_field() {
    let row = CandidateRow {
      person_uri:  Term::uri("http://data.example/persons/1"),
      name:        Term::literal("Bart"),
      family_name: Term::literal("Tommelein"),
      web_id:      None,
    };
    let value = serde_json::to_value(&row).unwrap();
    assert_eq!(
      value,
      json!({
        "personURI":  { "type": "uri", "value": "http://data.example/persons/1" },
        "name":       { "type": "literal", "value": "Bart" },
        "familyName": { "type": "literal", "value": "Tommelein" },
      })
    );
  }

  #[test]
  fn candidate_with_web_id_includes_literal() {
    let row = CandidateRow {
      person_uri:  Term::uri("http://data.example/persons/1"),
      name:        Term::literal("Bart"),
      family_name: Term::literal("Tommelein"),
      web_id:      Some(Term::literal("https://bart.example/profile/card#me")),
    };
    let value = serde_json::to_value(&row).unwrap();
    assert_eq!(
      value["webID"],
      json!({ "type": "literal", "value": "https://bart.example/profile/card#me" })
    );
  }

  #[test]
  fn reserved_city_detection() {
    let mut city = CityRow {
      city_uri:       Term::uri("http://data.example/cities/1"),
      city_name:      Term::literal("Gent"),
      location_label: Term::literal("Gemeente"),
    };
    assert!(!city.is_reserved());
    city.location_label = Term::literal("OCMW");
    assert!(city.is_reserved());
  }
}
