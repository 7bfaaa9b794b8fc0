use std::collections::{BTreeMap, HashMap};

/// Variable storage for a session
///
/// Reading a name that was never assigned defines it with value `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    variables: HashMap<String, i32>,
}

impl Environment {
    /// Creates an empty environment
    pub fn new() -> Self {
        Environment {
            variables: HashMap::new(),
        }
    }

    /// Gets the value of a variable, defining it as `0` if absent
    pub fn get(&mut self, name: &str) -> i32 {
        if let Some(value) = self.variables.get(name) {
            return *value;
        }
        self.variables.insert(name.to_string(), 0);
        0
    }

    /// Reads a variable without defining it
    pub fn lookup(&self, name: &str) -> Option<i32> {
        self.variables.get(name).copied()
    }

    /// Sets a variable value (updates existing or creates new)
    pub fn set(&mut self, name: &str, value: i32) {
        match self.variables.get_mut(name) {
            Some(slot) => *slot = value,
            None => {
                self.variables.insert(name.to_string(), value);
            }
        }
    }

    /// Resets a variable to `0`, creating it if needed
    pub fn declare(&mut self, name: &str) {
        self.set(name, 0);
    }

    /// Checks if a variable is defined
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Number of defined variables
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether no variable is defined
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// All variables ordered by name
    pub fn snapshot(&self) -> BTreeMap<String, i32> {
        self.variables
            .iter()
            .map(|(name, value)| (name.clone(), *value))
            .collect()
    }

    /// Removes every variable
    pub fn clear(&mut self) {
        self.variables.clear();
    }
}

impl FromIterator<(String, i32)> for Environment {
    fn from_iter<I: IntoIterator<Item = (String, i32)>>(iter: I) -> Self {
        Environment {
            variables: iter.into_iter().collect(),
        }
    }
}
