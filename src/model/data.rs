use crate::foundation::error::{PlacardError, PlacardResult};

/// Maximum number of featured items (the grid is fixed at 3×3).
pub const FEATURED_MAX: usize = 9;

/// One of the three fixed poster templates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    Featured,
    Grocery,
    Groups,
}

impl Template {
    /// All templates in export order.
    pub const ALL: [Template; 3] = [Template::Featured, Template::Grocery, Template::Groups];

    pub fn title(self) -> &'static str {
        match self {
            Template::Featured => "Featured Items",
            Template::Grocery => "Grocery",
            Template::Groups => "Groups",
        }
    }
}

/// Section titles of the Groups template, in stacking order.
pub const GROUP_SECTION_TITLES: [&str; 3] = ["Frozen Foods", "Meat", "Produce"];

/// A generic priced line item. `price` holds a pre-formatted currency string
/// (`"$12.34"` once normalized); transiently malformed values are tolerated
/// during editing and repaired by [`FlyerData::sanitize`].
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Row {
    pub name: String,
    pub size: String,
    pub price: String,
}

impl Row {
    pub fn new(name: impl Into<String>, size: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: size.into(),
            price: price.into(),
        }
    }
}

/// A featured item: a priced row plus an image reference.
///
/// `image_ref` is empty, an absolute HTTP(S) URL, a drive share URL or bare
/// drive ID, or an opaque token (`media://<id>` / `asset://<name>`).
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FeaturedItem {
    #[serde(flatten)]
    pub row: Row,
    #[serde(default)]
    pub image_ref: String,
}

/// Fixed header/footer copy: store name, the two-line left label, the date
/// range, and the footer's hours/address lines.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StoreInfo {
    pub name: String,
    pub label_lines: [String; 2],
    pub date_range: String,
    pub hours: String,
    pub address: String,
}

impl Default for StoreInfo {
    fn default() -> Self {
        Self {
            name: "Neighborhood Market".to_string(),
            label_lines: ["WEEKLY".to_string(), "SPECIALS".to_string()],
            date_range: "Valid this week only".to_string(),
            hours: "Open daily 8am – 9pm".to_string(),
            address: "100 Main Street".to_string(),
        }
    }
}

/// The full validated table set consumed by the composers.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FlyerData {
    #[serde(default)]
    pub featured: Vec<FeaturedItem>,
    #[serde(default)]
    pub grocery: Vec<Row>,
    #[serde(default)]
    pub frozen: Vec<Row>,
    #[serde(default)]
    pub meat: Vec<Row>,
    #[serde(default)]
    pub produce: Vec<Row>,
    #[serde(default)]
    pub store: StoreInfo,
}

/// Severity of a per-row validation issue. Errors block an import; warnings
/// are informational and the offending row is repaired or dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Error,
    Warning,
}

/// One validation finding, tied to a category and row index.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RowIssue {
    pub severity: IssueSeverity,
    pub category: String,
    pub index: usize,
    pub message: String,
}

impl RowIssue {
    fn warning(category: &str, index: usize, message: impl Into<String>) -> Self {
        Self {
            severity: IssueSeverity::Warning,
            category: category.to_string(),
            index,
            message: message.into(),
        }
    }
}

/// Normalize a price string to the canonical `$D+.DD` form.
///
/// Accepts an optional `$`, thousands separators, and surrounding
/// whitespace. Returns `None` for anything that does not parse to a finite
/// non-negative amount.
pub fn normalize_price(raw: &str) -> Option<String> {
    let cleaned: String = raw
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    let value: f64 = cleaned.parse().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    Some(format!("${value:.2}"))
}

impl FlyerData {
    /// Repair the data set for composition: nameless rows are dropped,
    /// unparsable prices become `$0.00`, and featured items past the 3×3 cap
    /// are discarded. Returns the cleaned copy plus collected warnings; the
    /// receiver is left untouched.
    pub fn sanitize(&self) -> (FlyerData, Vec<RowIssue>) {
        let mut issues = Vec::new();
        let mut out = FlyerData {
            store: self.store.clone(),
            ..FlyerData::default()
        };

        let mut featured = Vec::new();
        for (idx, item) in self.featured.iter().enumerate() {
            if featured.len() == FEATURED_MAX {
                issues.push(RowIssue::warning(
                    "Featured Items",
                    idx,
                    format!("dropped: only {FEATURED_MAX} featured items fit the grid"),
                ));
                continue;
            }
            let Some(row) = sanitize_row(&item.row, "Featured Items", idx, &mut issues) else {
                continue;
            };
            featured.push(FeaturedItem {
                row,
                image_ref: item.image_ref.clone(),
            });
        }
        out.featured = featured;

        out.grocery = sanitize_rows(&self.grocery, "Grocery", &mut issues);
        out.frozen = sanitize_rows(&self.frozen, "Frozen Foods", &mut issues);
        out.meat = sanitize_rows(&self.meat, "Meat", &mut issues);
        out.produce = sanitize_rows(&self.produce, "Produce", &mut issues);

        (out, issues)
    }

    /// Sanitize an imported table set and reject it outright when nothing
    /// usable remains. On error the caller keeps its previous data set.
    pub fn validate_import(&self) -> PlacardResult<(FlyerData, Vec<RowIssue>)> {
        let (clean, issues) = self.sanitize();
        let total = clean.featured.len()
            + clean.grocery.len()
            + clean.frozen.len()
            + clean.meat.len()
            + clean.produce.len();
        if total == 0 {
            return Err(PlacardError::data(
                "import contains no valid rows in any category",
            ));
        }
        Ok((clean, issues))
    }

    /// Append a featured item, refusing once the grid cap is reached.
    pub fn push_featured(&mut self, item: FeaturedItem) -> bool {
        if self.featured.len() >= FEATURED_MAX {
            return false;
        }
        self.featured.push(item);
        true
    }

    /// Move a featured item from one slot to another (drag reorder).
    pub fn reorder_featured(&mut self, from: usize, to: usize) -> bool {
        if from >= self.featured.len() || to >= self.featured.len() {
            return false;
        }
        let item = self.featured.remove(from);
        self.featured.insert(to, item);
        true
    }

    pub fn remove_featured(&mut self, index: usize) -> bool {
        if index >= self.featured.len() {
            return false;
        }
        self.featured.remove(index);
        true
    }

    /// All non-empty image references, in grid order.
    pub fn image_refs(&self) -> Vec<String> {
        self.featured
            .iter()
            .filter(|i| !i.image_ref.is_empty())
            .map(|i| i.image_ref.clone())
            .collect()
    }
}

fn sanitize_rows(rows: &[Row], category: &str, issues: &mut Vec<RowIssue>) -> Vec<Row> {
    rows.iter()
        .enumerate()
        .filter_map(|(idx, row)| sanitize_row(row, category, idx, issues))
        .collect()
}

fn sanitize_row(
    row: &Row,
    category: &str,
    index: usize,
    issues: &mut Vec<RowIssue>,
) -> Option<Row> {
    if row.name.trim().is_empty() {
        issues.push(RowIssue::warning(category, index, "row has no name"));
        return None;
    }
    let price = match normalize_price(&row.price) {
        Some(p) => p,
        None => {
            issues.push(RowIssue::warning(
                category,
                index,
                format!("price '{}' is not a valid amount", row.price),
            ));
            "$0.00".to_string()
        }
    };
    Some(Row {
        name: row.name.trim().to_string(),
        size: row.size.trim().to_string(),
        price,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/model/data.rs"]
mod tests;
