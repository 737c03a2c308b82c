//! The fixed queries sent to the election dataset.
//!
//! Identifiers supplied by callers are only ever interpolated as `<IRI>`
//! after [`iri`] accepted them, so they cannot change the shape of a query.

use oxiri::Iri;

const PREFIXES: &str = "\
PREFIX rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#>
PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>
PREFIX skos: <http://www.w3.org/2004/02/skos/core#>
PREFIX foaf: <http://xmlns.com/foaf/0.1/>
PREFIX person: <http://www.w3.org/ns/person#>
PREFIX persoon: <http://data.vlaanderen.be/ns/persoon#>
PREFIX mandaat: <http://data.vlaanderen.be/ns/mandaat#>
PREFIX besluit: <http://data.vlaanderen.be/ns/besluit#>
";

/// Parse `value` as an absolute IRI. `None` for anything else.
pub fn iri(value: &str) -> Option<Iri<&str>> { Iri::parse(value).ok() }

pub fn person_exists(person: &Iri<&str>) -> String {
  format!(
    "{PREFIXES}ASK {{
  <{person}> rdf:type person:Person .
}}",
    person = person.as_str()
  )
}

pub fn cities() -> String {
  format!(
    "{PREFIXES}SELECT DISTINCT ?cityURI ?cityName ?locationLabel
WHERE {{
  ?list rdf:type mandaat:Kandidatenlijst ;
        mandaat:behoortTot ?election .
  ?election mandaat:steltSamen ?body .
  ?body mandaat:isTijdspecialisatieVan ?timelessBody .
  ?timelessBody besluit:bestuurt ?unit .
  ?unit besluit:werkingsgebied ?cityURI ;
        besluit:classificatie ?classification .
  ?classification skos:prefLabel ?locationLabel .
  ?cityURI rdfs:label ?cityName .
  FILTER NOT EXISTS {{ ?classification skos:prefLabel \"{reserved}\" }}
}}",
    reserved = webid_core::row::RESERVED_CLASSIFICATION
  )
}

pub fn candidate_lists(city: &Iri<&str>) -> String {
  format!(
    "{PREFIXES}SELECT DISTINCT ?listURI ?listName
WHERE {{
  ?listURI rdf:type mandaat:Kandidatenlijst ;
           skos:prefLabel ?listName ;
           mandaat:behoortTot ?election .
  ?election mandaat:steltSamen ?body .
  ?body mandaat:isTijdspecialisatieVan ?timelessBody .
  ?timelessBody besluit:bestuurt ?unit .
  ?unit besluit:werkingsgebied <{city}> ;
        besluit:classificatie ?classification .
  ?classification skos:prefLabel ?locationLabel .
  FILTER NOT EXISTS {{ ?classification skos:prefLabel \"{reserved}\" }}
}}",
    city = city.as_str(),
    reserved = webid_core::row::RESERVED_CLASSIFICATION
  )
}

pub fn candidates(list: &Iri<&str>) -> String {
  format!(
    "{PREFIXES}SELECT DISTINCT ?personURI ?name ?familyName
WHERE {{
  <{list}> mandaat:heeftKandidaat ?personURI .
  ?personURI persoon:gebruikteVoornaam ?name ;
             foaf:familyName ?familyName .
}}",
    list = list.as_str()
  )
}

pub fn memberships(person: &Iri<&str>) -> String {
  format!(
    "{PREFIXES}SELECT DISTINCT ?name ?familyName ?listURI ?listName ?trackingNb
WHERE {{
  <{person}> persoon:gebruikteVoornaam ?name ;
             foaf:familyName ?familyName .
  ?listURI mandaat:heeftKandidaat <{person}> ;
           skos:prefLabel ?listName ;
           mandaat:lijstnummer ?trackingNb .
}}",
    person = person.as_str()
  )
}
