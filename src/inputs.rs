use indexmap::IndexMap;

/// Crisp input values keyed by input variable name. Unknown names are ignored on evaluation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Inputs(pub(crate) IndexMap<String, f64>);

impl Inputs {
    pub fn new() -> Self {
        Inputs(IndexMap::new())
    }

    /// Setting the same variable twice keeps the last value
    pub fn add(&mut self, variable: impl Into<String>, val: f64) -> &mut Self {
        self.0.insert(variable.into(), val);
        self
    }

    pub fn get(&self, variable: &str) -> Option<f64> {
        self.0.get(variable).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(name, val)| (name.as_str(), *val))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Inputs {
    fn from_iter<T: IntoIterator<Item = (K, f64)>>(iter: T) -> Self {
        Inputs(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl<K: Into<String>, const N: usize> From<[(K, f64); N]> for Inputs {
    fn from(values: [(K, f64); N]) -> Self {
        values.into_iter().collect()
    }
}

#[test]
fn test_inputs() {
    let mut inputs = Inputs::from([("Pain", 3.), ("Temperature", 37.)]);

    inputs.add("Pain", 8.).add("BloodPressure", 120.);

    assert_eq!(inputs.len(), 3);
    assert_eq!(inputs.get("Pain"), Some(8.));
    assert_eq!(inputs.get("Missing"), None);
    assert_eq!(
        inputs.iter().map(|(name, _)| name).collect::<Vec<_>>(),
        ["Pain", "Temperature", "BloodPressure"]
    );
}
