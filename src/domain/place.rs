//! Place domain model and suggestion types.
//!
//! This module defines the core data carried through the engine: the raw [`Place`]
//! record as returned by a geocoding provider, the [`Suggestion`] wrapper the engine
//! exposes to renderers, and the [`SuggestionId`] identity used to resolve
//! selections. Suggestions are immutable once produced; every new fetch supersedes
//! the previous list wholesale.

use serde::{Deserialize, Serialize};

/// Identity of a suggestion, as assigned by the provider.
///
/// Providers are free to key their records by numeric or string identifiers, so
/// both representations are accepted and compared structurally. Deserialization is
/// untagged: a JSON number becomes [`SuggestionId::Num`], a JSON string becomes
/// [`SuggestionId::Text`].
///
/// # Examples
///
/// ```
/// use searchbox::domain::SuggestionId;
///
/// let by_number = SuggestionId::from(42_u64);
/// let by_text = SuggestionId::from("osm:42");
/// assert_ne!(by_number, by_text);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SuggestionId {
    /// Numeric identifier (e.g. a Nominatim `place_id`).
    Num(u64),
    /// String identifier for providers without numeric keys.
    Text(String),
}

impl From<u64> for SuggestionId {
    fn from(id: u64) -> Self {
        Self::Num(id)
    }
}

impl From<String> for SuggestionId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

impl From<&str> for SuggestionId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

/// A raw geocoding record as returned by the suggestion provider.
///
/// The field set follows the OpenStreetMap Nominatim search response. Only
/// `place_id` and `display_name` are load-bearing for the engine; the remaining
/// fields are carried through untouched so a renderer can use them (coordinates
/// for a map preview, `icon` for a glyph). Providers omit most of them freely,
/// so everything else is defaulted when absent.
///
/// # Fields
///
/// - `place_id`: Provider-assigned numeric identity
/// - `display_name`: Human-readable label shown in the dropdown
/// - `lat`/`lon`: Coordinates as decimal strings (Nominatim's own encoding)
/// - `boundingbox`: `[min_lat, max_lat, min_lon, max_lon]` as strings
/// - `class`/`kind`: Coarse OSM categorization (`kind` maps the wire key `type`)
/// - `importance`: Provider ranking score in `[0, 1]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub place_id: u64,
    pub display_name: String,
    #[serde(default)]
    pub licence: Option<String>,
    #[serde(default)]
    pub osm_type: Option<String>,
    #[serde(default)]
    pub osm_id: Option<serde_json::Value>,
    #[serde(default)]
    pub boundingbox: Vec<String>,
    #[serde(default)]
    pub lat: String,
    #[serde(default)]
    pub lon: String,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub importance: Option<f64>,
    #[serde(default)]
    pub icon: Option<String>,
}

impl Place {
    /// Creates a minimal place with the given identity and label.
    ///
    /// All optional provider fields are left empty. Useful for providers that
    /// synthesize results locally and throughout the test suites.
    ///
    /// # Examples
    ///
    /// ```
    /// use searchbox::domain::Place;
    ///
    /// let place = Place::new(1, "Paris, France");
    /// assert_eq!(place.place_id, 1);
    /// assert_eq!(place.display_name, "Paris, France");
    /// assert!(place.boundingbox.is_empty());
    /// ```
    #[must_use]
    pub fn new(place_id: u64, display_name: impl Into<String>) -> Self {
        Self {
            place_id,
            display_name: display_name.into(),
            licence: None,
            osm_type: None,
            osm_id: None,
            boundingbox: Vec::new(),
            lat: String::new(),
            lon: String::new(),
            class: None,
            kind: None,
            importance: None,
            icon: None,
        }
    }
}

/// One candidate result presented to the user.
///
/// Pairs the identity and label the engine works with against the full provider
/// record. The label is what a selection writes back into the query text; the id
/// is what a `select` event resolves against the current list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Identity used to resolve selection events.
    pub id: SuggestionId,

    /// Display label, applied to the query text when this suggestion is picked.
    pub label: String,

    /// The underlying provider record.
    pub place: Place,
}

impl Suggestion {
    /// Wraps a provider record into a suggestion.
    ///
    /// The id is taken from `place_id` and the label from `display_name`.
    ///
    /// # Examples
    ///
    /// ```
    /// use searchbox::domain::{Place, Suggestion, SuggestionId};
    ///
    /// let suggestion = Suggestion::from_place(Place::new(7, "Berlin"));
    /// assert_eq!(suggestion.id, SuggestionId::Num(7));
    /// assert_eq!(suggestion.label, "Berlin");
    /// ```
    #[must_use]
    pub fn from_place(place: Place) -> Self {
        Self {
            id: SuggestionId::Num(place.place_id),
            label: place.display_name.clone(),
            place,
        }
    }
}
