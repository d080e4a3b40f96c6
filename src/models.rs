use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Expense category offered by the form selector
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Category {
    #[default]
    General,
    Food,
    Transport,
    Shopping,
    Bills,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::General,
        Category::Food,
        Category::Transport,
        Category::Shopping,
        Category::Bills,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::General => "General",
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Shopping => "Shopping",
            Category::Bills => "Bills",
        }
    }

    pub fn next(&self) -> Category {
        match self {
            Category::General => Category::Food,
            Category::Food => Category::Transport,
            Category::Transport => Category::Shopping,
            Category::Shopping => Category::Bills,
            Category::Bills => Category::General,
        }
    }

    pub fn prev(&self) -> Category {
        match self {
            Category::General => Category::Bills,
            Category::Food => Category::General,
            Category::Transport => Category::Food,
            Category::Shopping => Category::Transport,
            Category::Bills => Category::Shopping,
        }
    }

    /// Position in [`Category::ALL`], used by the selector widget
    pub fn index(&self) -> usize {
        Category::ALL.iter().position(|c| c == self).unwrap_or(0)
    }
}

/// Expense being edited in the form. Never leaves the client as-is.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DraftExpense {
    pub title: String,
    /// Raw text typed by the user
    pub amount: String,
    pub category: Category,
}

impl DraftExpense {
    /// Validated payload, or `None` when the draft must not be sent.
    ///
    /// The title must be non-empty and the amount must parse to a finite number.
    pub fn to_payload(&self) -> Option<NewExpense> {
        if self.title.is_empty() {
            return None;
        }
        let amount = self.amount.trim().parse::<f64>().ok()?;
        if !amount.is_finite() {
            return None;
        }
        Some(NewExpense {
            title: self.title.clone(),
            amount,
            category: self.category.as_str().to_string(),
        })
    }

    /// Reset after a successful submission; the category sticks
    pub fn clear(&mut self) {
        self.title.clear();
        self.amount.clear();
    }
}

/// Body of `POST /api/expenses`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewExpense {
    pub title: String,
    pub amount: f64,
    pub category: String,
}

/// Expense record as returned by `GET /api/expenses`.
///
/// Fields are kept as raw JSON so that malformed entries still render.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Expense {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub title: Value,
    #[serde(default)]
    pub amount: Value,
    #[serde(default)]
    pub category: Value,
}

impl Expense {
    /// Build from one array entry of the list response.
    ///
    /// Objects decode field by field; anything else keeps its raw value as the title.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
            other => Expense {
                title: other,
                ..Default::default()
            },
        }
    }

    pub fn title_text(&self) -> String {
        value_text(&self.title)
    }

    pub fn category_text(&self) -> String {
        value_text(&self.category)
    }

    /// Amount with two decimals, or the raw value if it is not a number
    pub fn amount_text(&self) -> String {
        match self.amount.as_f64() {
            // Ties round away from zero
            Some(n) => format!("${:.2}", (n * 100.0).round() / 100.0),
            None => format!("${}", value_text(&self.amount)),
        }
    }

    /// One-line rendering: `title / category / $amount`
    pub fn row_text(&self) -> String {
        format!(
            "{} / {} / {}",
            self.title_text(),
            self.category_text(),
            self.amount_text()
        )
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
