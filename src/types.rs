use calamine::Data;
use chrono::NaiveDateTime;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::fmt;

/// Serial of 1970-01-01 in the 1900 date system
const UNIX_EPOCH_SERIAL: f64 = 25569.0;
/// Serial of 1900-03-01, the first day after Excel's phantom 1900-02-29
const MARCH_1900_SERIAL: f64 = 61.0;
const MS_PER_DAY: f64 = 86_400_000.0;
/// Largest f64 magnitude where every whole number is exact
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

//==============================================================================
// Cell Values
//==============================================================================

/// A single scalar read from (or written to) a worksheet cell
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
}

impl CellValue {
    /// Blank cells are skipped when deciding whether a row holds data
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Exact text comparison, used for header and environment lookups
    pub fn is_text(&self, expected: &str) -> bool {
        matches!(self, CellValue::Text(s) if s == expected)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Excel serial number for a datetime (1900 date system).
    ///
    /// Excel counts a 1900-02-29 that never existed, so dates before
    /// 1900-03-01 sit one serial lower than a plain day count gives.
    pub fn excel_serial(dt: &NaiveDateTime) -> f64 {
        let serial = dt.and_utc().timestamp_millis() as f64 / MS_PER_DAY + UNIX_EPOCH_SERIAL;
        if serial < MARCH_1900_SERIAL {
            serial - 1.0
        } else {
            serial
        }
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CellValue::Empty => serializer.serialize_none(),
            CellValue::Text(s) => serializer.serialize_str(s),
            // Whole numbers come out as integers: 1, not 1.0
            CellValue::Number(n) if n.fract() == 0.0 && n.abs() < MAX_EXACT_INT => {
                serializer.serialize_i64(*n as i64)
            }
            CellValue::Number(n) => serializer.serialize_f64(*n),
            CellValue::Bool(b) => serializer.serialize_bool(*b),
            CellValue::DateTime(dt) => dt.serialize(serializer),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Bool(true) => write!(f, "TRUE"),
            CellValue::Bool(false) => write!(f, "FALSE"),
            CellValue::DateTime(dt) => write!(f, "{}", dt),
        }
    }
}

impl From<&Data> for CellValue {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty => CellValue::Empty,
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Float(f) => CellValue::Number(*f),
            Data::Int(i) => CellValue::Number(*i as f64),
            Data::Bool(b) => CellValue::Bool(*b),
            Data::DateTime(dt) => {
                if dt.is_datetime() {
                    match dt.as_datetime() {
                        Some(value) => CellValue::DateTime(value),
                        None => CellValue::Number(dt.as_f64()),
                    }
                } else {
                    // Durations keep their raw serial
                    CellValue::Number(dt.as_f64())
                }
            }
            Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
            Data::Error(e) => CellValue::Text(e.to_string()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(dt: NaiveDateTime) -> Self {
        CellValue::DateTime(dt)
    }
}

/// One worksheet row, column A first
pub type Row = Vec<CellValue>;

//==============================================================================
// Ordered Dictionaries
//==============================================================================

/// Insertion-ordered map with last-write-wins updates.
///
/// Re-inserting a key keeps its original position and replaces its value, so
/// folding rows in order yields the values of the last row for shared keys.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedDict<V> {
    entries: Vec<(String, V)>,
}

impl<V> OrderedDict<V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Apply every entry of `other` in order, overwriting shared keys
    pub fn update(&mut self, other: OrderedDict<V>) {
        for (key, value) in other.entries {
            self.insert(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for OrderedDict<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for OrderedDict<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = OrderedDict::new();
        for (key, value) in iter {
            dict.insert(key, value);
        }
        dict
    }
}

impl<V: Serialize> Serialize for OrderedDict<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Header → value projection of one or more rows
pub type RowDict = OrderedDict<CellValue>;

//==============================================================================
// Whole-Workbook Projections
//==============================================================================

/// Which sheets `read_data1` folds
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SheetSelection {
    /// Every sheet in the workbook, keyed by sheet name
    #[default]
    All,
    /// A single sheet, same result as `read_data`
    Named(String),
}

impl SheetSelection {
    /// Legacy keyword argument: the literal `NONE` selects every sheet
    pub fn from_arg(arg: &str) -> Self {
        if arg == "NONE" {
            SheetSelection::All
        } else {
            SheetSelection::Named(arg.to_string())
        }
    }
}

/// Result of `read_data1`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum WorkbookData {
    /// Sheet name → folded dictionary, in workbook order
    Sheets(OrderedDict<RowDict>),
    Sheet(RowDict),
}

impl WorkbookData {
    pub fn sheets(&self) -> Option<&OrderedDict<RowDict>> {
        match self {
            WorkbookData::Sheets(sheets) => Some(sheets),
            WorkbookData::Sheet(_) => None,
        }
    }

    pub fn sheet(&self) -> Option<&RowDict> {
        match self {
            WorkbookData::Sheet(dict) => Some(dict),
            WorkbookData::Sheets(_) => None,
        }
    }
}
