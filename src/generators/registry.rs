use std::collections::BTreeMap;
use std::sync::Arc;

use super::Generator;

/// Maps normalized language keys (aliases included) to generators.
#[derive(Clone, Default)]
pub struct TemplateRegistry {
    generators: BTreeMap<&'static str, Arc<dyn Generator>>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(&["python"], Arc::new(super::PythonGenerator));
        registry.register(&["nodejs", "node"], Arc::new(super::NodeGenerator));
        registry.register(&["deno"], Arc::new(super::DenoGenerator));
        registry.register(&["bun"], Arc::new(super::BunGenerator));
        registry.register(&["go", "golang"], Arc::new(super::GoGenerator));
        registry.register(&["rust"], Arc::new(super::RustGenerator));
        registry.register(&["r"], Arc::new(super::RGenerator));
        registry.register(&["java", "jdk"], Arc::new(super::JavaGenerator));
        registry.register(&["swift"], Arc::new(super::SwiftGenerator));
        registry.register(&["c++", "cpp"], Arc::new(super::CppGenerator));
        registry.register(&["dart"], Arc::new(super::DartGenerator));
        registry
    }

    /// Register `generator` under every key in `keys`, replacing earlier entries.
    pub fn register(&mut self, keys: &[&'static str], generator: Arc<dyn Generator>) {
        for key in keys {
            self.generators.insert(*key, Arc::clone(&generator));
        }
    }

    pub fn get(&self, key: &str) -> Option<&dyn Generator> {
        self.generators.get(key).map(|generator| generator.as_ref())
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.generators.keys().copied()
    }
}
