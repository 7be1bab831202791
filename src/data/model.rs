use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Feature – one of the four measurement columns
// ---------------------------------------------------------------------------

/// A named numeric measurement column, present on every record.
/// The set is closed: the Iris table always carries exactly these four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    SepalLength,
    SepalWidth,
    PetalLength,
    PetalWidth,
}

impl Feature {
    /// Canonical column order, matching the source table.
    pub const ALL: [Feature; 4] = [
        Feature::SepalLength,
        Feature::SepalWidth,
        Feature::PetalLength,
        Feature::PetalWidth,
    ];

    /// Position of this feature in a record's value array.
    pub fn index(self) -> usize {
        match self {
            Feature::SepalLength => 0,
            Feature::SepalWidth => 1,
            Feature::PetalLength => 2,
            Feature::PetalWidth => 3,
        }
    }

    /// Display name used for table headers and axis labels.
    pub fn label(self) -> &'static str {
        match self {
            Feature::SepalLength => "sepal length (cm)",
            Feature::SepalWidth => "sepal width (cm)",
            Feature::PetalLength => "petal length (cm)",
            Feature::PetalWidth => "petal width (cm)",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Species – the closed category set
// ---------------------------------------------------------------------------

/// The classification label attached to each record.  Fixed at load time;
/// [`Species::ALL`] is the enumeration order used for colour assignment and
/// per-cell overlay order, so the same order applies across a whole render
/// pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Species {
    Setosa,
    Versicolor,
    Virginica,
}

impl Species {
    pub const ALL: [Species; 3] = [Species::Setosa, Species::Versicolor, Species::Virginica];

    pub fn name(self) -> &'static str {
        match self {
            Species::Setosa => "setosa",
            Species::Versicolor => "versicolor",
            Species::Virginica => "virginica",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown species label: {0:?}")]
pub struct ParseSpeciesError(pub String);

impl FromStr for Species {
    type Err = ParseSpeciesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "setosa" => Ok(Species::Setosa),
            "versicolor" => Ok(Species::Versicolor),
            "virginica" => Ok(Species::Virginica),
            other => Err(ParseSpeciesError(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// IrisRecord – one measured specimen
// ---------------------------------------------------------------------------

/// A single specimen: one value per feature plus its species label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IrisRecord {
    /// Feature values indexed by [`Feature::index`].
    pub values: [f64; 4],
    pub species: Species,
}

impl IrisRecord {
    pub fn value(&self, feature: Feature) -> f64 {
        self.values[feature.index()]
    }
}

// ---------------------------------------------------------------------------
// IrisDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full dataset: an ordered sequence of records, loaded once at start
/// and immutable for the rest of the session.
#[derive(Debug, Clone)]
pub struct IrisDataset {
    pub records: Vec<IrisRecord>,
}

impl IrisDataset {
    pub fn from_records(records: Vec<IrisRecord>) -> Self {
        IrisDataset { records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Values of one feature restricted to one species, in record order.
    pub fn species_values(&self, feature: Feature, species: Species) -> Vec<f64> {
        self.records
            .iter()
            .filter(|r| r.species == species)
            .map(|r| r.value(feature))
            .collect()
    }

    /// (x, y) pairs for one species, used by the scatter cells.
    pub fn species_points(&self, x: Feature, y: Feature, species: Species) -> Vec<[f64; 2]> {
        self.records
            .iter()
            .filter(|r| r.species == species)
            .map(|r| [r.value(x), r.value(y)])
            .collect()
    }

    /// Number of records carrying the given species label.
    pub fn species_count(&self, species: Species) -> usize {
        self.records.iter().filter(|r| r.species == species).count()
    }
}
