use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    Options, evaluate_with,
    error::FormulaError,
    formula::store::KeyValueStore,
    interpreter::variables::free_variables,
};

/// The store key under which the formula list is kept.
pub const FORMULAS_KEY: &str = "programmable-formulas";

/// A saved, named expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Formula {
    /// Unique id within the book, a decimal number.
    pub id:         String,
    /// Display name, such as `Profit Margin`.
    pub name:       String,
    /// The infix expression, such as `(price - cost) / price * 100`.
    pub expression: String,
}

impl Formula {
    /// The free variables of the expression, in order of first appearance.
    #[must_use]
    pub fn variables(&self) -> Vec<String> {
        free_variables(&self.expression)
    }
}

/// The user's formulas, persisted to a [`KeyValueStore`].
///
/// Every change is written back to the store immediately. If that write
/// fails, the change is undone and the error returned, so the book in memory
/// never drifts from what was stored.
///
/// # Example
/// ```
/// use std::collections::HashMap;
///
/// use formulary::formula::{FormulaBook, store::MemoryStore};
///
/// let mut book = FormulaBook::load(MemoryStore::new()).unwrap();
/// let id = book.add("Margin", "(price - cost) / price * 100").unwrap().id.clone();
///
/// let values = HashMap::from([("price".to_string(), 50.0), ("cost".to_string(), 40.0)]);
/// assert_eq!(book.evaluate(&id, &values).unwrap(), 20.0);
/// ```
#[derive(Debug)]
pub struct FormulaBook<S> {
    store:    S,
    formulas: Vec<Formula>,
}

impl<S: KeyValueStore> FormulaBook<S> {
    /// Reads the formula list from `store`. A store without a list yields an
    /// empty book.
    pub fn load(store: S) -> Result<Self, FormulaError> {
        let formulas: Vec<Formula> = match store.get(FORMULAS_KEY)? {
            Some(blob) => serde_json::from_slice(&blob)?,
            None => Vec::new(),
        };
        debug!(count = formulas.len(), "loaded formula book");

        Ok(Self { store, formulas })
    }

    /// All formulas, oldest first.
    #[must_use]
    pub fn formulas(&self) -> &[Formula] {
        &self.formulas
    }

    /// The formula with the given id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Formula> {
        self.formulas.iter().find(|f| f.id == id)
    }

    /// The first formula with exactly this name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Formula> {
        self.formulas.iter().find(|f| f.name == name)
    }

    /// The backing store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the book and returns its store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Saves a new formula and returns it.
    ///
    /// The name and expression are kept as given, but neither may be blank.
    /// The expression is not evaluated here; mistakes surface when it is run.
    pub fn add(&mut self, name: &str, expression: &str) -> Result<&Formula, FormulaError> {
        if name.trim().is_empty() {
            return Err(FormulaError::EmptyName);
        }
        if expression.trim().is_empty() {
            return Err(FormulaError::EmptyExpression);
        }

        let formula = Formula { id:         self.next_id(),
                                name:       name.to_string(),
                                expression: expression.to_string(), };
        debug!(id = %formula.id, name = %formula.name, "adding formula");

        let index = self.formulas.len();
        self.formulas.push(formula);
        if let Err(e) = self.persist() {
            self.formulas.pop();
            return Err(e);
        }

        Ok(&self.formulas[index])
    }

    /// Deletes the formula with the given id and returns it.
    pub fn remove(&mut self, id: &str) -> Result<Formula, FormulaError> {
        let index = self.formulas
                        .iter()
                        .position(|f| f.id == id)
                        .ok_or_else(|| FormulaError::UnknownFormula { id: id.to_string() })?;

        let removed = self.formulas.remove(index);
        debug!(id = %removed.id, name = %removed.name, "removing formula");

        if let Err(e) = self.persist() {
            self.formulas.insert(index, removed);
            return Err(e);
        }

        Ok(removed)
    }

    /// Evaluates a saved formula with the given variable values.
    ///
    /// Every free variable of the formula needs a value that is not NaN.
    /// Extra values are ignored.
    pub fn evaluate(&self, id: &str, values: &HashMap<String, f64>) -> Result<f64, FormulaError> {
        self.evaluate_with(id, values, &Options::new())
    }

    /// Like [`evaluate`](Self::evaluate), with explicit [`Options`].
    pub fn evaluate_with(&self,
                         id: &str,
                         values: &HashMap<String, f64>,
                         options: &Options)
                         -> Result<f64, FormulaError> {
        let formula =
            self.get(id).ok_or_else(|| FormulaError::UnknownFormula { id: id.to_string() })?;

        let missing: Vec<String> =
            formula.variables()
                   .into_iter()
                   .filter(|name| values.get(name).is_none_or(|value| value.is_nan()))
                   .collect();
        if !missing.is_empty() {
            return Err(FormulaError::MissingVariables { names: missing });
        }

        Ok(evaluate_with(&formula.expression, values, options)?)
    }

    /// One more than the largest numeric id in the book, starting at `1`.
    fn next_id(&self) -> String {
        let max = self.formulas
                      .iter()
                      .filter_map(|f| f.id.parse::<u64>().ok())
                      .max()
                      .unwrap_or(0);
        max.saturating_add(1).to_string()
    }

    fn persist(&mut self) -> Result<(), FormulaError> {
        let blob = serde_json::to_vec(&self.formulas)?;
        self.store.put(FORMULAS_KEY, &blob)?;
        debug!(count = self.formulas.len(), "persisted formula book");
        Ok(())
    }
}
