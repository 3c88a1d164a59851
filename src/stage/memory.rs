use std::collections::BTreeMap;

use super::{ElementId, Stage, StyleProp};

/// One recorded stage mutation, in application order.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum Mutation {
    Style {
        element: ElementId,
        prop: StyleProp,
        value: f64,
    },
    Attr {
        element: ElementId,
        name: String,
        value: String,
    },
    Class {
        element: ElementId,
        class: String,
    },
}

#[derive(Debug)]
struct MemoryElement {
    selector: String,
    alive: bool,
    styles: BTreeMap<StyleProp, f64>,
    attrs: BTreeMap<String, String>,
    classes: Vec<String>,
}

/// In-memory stage for tests, demos, and the CLI sweep.
///
/// Selectors are literal tags: `resolve` matches by string equality, in
/// insertion (document) order. Every applied mutation is recorded for
/// assertions; idempotent class re-additions are not recorded.
#[derive(Debug, Default)]
pub struct MemoryStage {
    elements: Vec<MemoryElement>,
    mutations: Vec<Mutation>,
}

impl MemoryStage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element answering to `selector`.
    pub fn insert(&mut self, selector: impl Into<String>) -> ElementId {
        let id = ElementId(self.elements.len() as u64);
        self.elements.push(MemoryElement {
            selector: selector.into(),
            alive: true,
            styles: BTreeMap::new(),
            attrs: BTreeMap::new(),
            classes: Vec::new(),
        });
        id
    }

    /// Add an element carrying one pre-set attribute (e.g. a delay attribute).
    pub fn insert_with_attr(
        &mut self,
        selector: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> ElementId {
        let id = self.insert(selector);
        self.elements[id.0 as usize]
            .attrs
            .insert(name.into(), value.into());
        id
    }

    /// Detach an element: it no longer resolves and silently ignores
    /// mutations, like a DOM node removed from the document.
    pub fn remove(&mut self, el: ElementId) {
        if let Some(e) = self.elements.get_mut(el.0 as usize) {
            e.alive = false;
        }
    }

    pub fn style(&self, el: ElementId, prop: StyleProp) -> Option<f64> {
        self.elements
            .get(el.0 as usize)?
            .styles
            .get(&prop)
            .copied()
    }

    pub fn get_attr(&self, el: ElementId, name: &str) -> Option<String> {
        self.elements.get(el.0 as usize)?.attrs.get(name).cloned()
    }

    pub fn classes(&self, el: ElementId) -> &[String] {
        self.elements
            .get(el.0 as usize)
            .map(|e| e.classes.as_slice())
            .unwrap_or(&[])
    }

    pub fn has_class(&self, el: ElementId, class: &str) -> bool {
        self.classes(el).iter().any(|c| c == class)
    }

    pub fn mutations(&self) -> &[Mutation] {
        &self.mutations
    }

    pub fn clear_mutations(&mut self) {
        self.mutations.clear();
    }

    fn live(&self, el: ElementId) -> Option<&MemoryElement> {
        self.elements.get(el.0 as usize).filter(|e| e.alive)
    }

    fn live_mut(&mut self, el: ElementId) -> Option<&mut MemoryElement> {
        self.elements.get_mut(el.0 as usize).filter(|e| e.alive)
    }
}

impl Stage for MemoryStage {
    fn resolve(&self, selector: &str) -> Option<ElementId> {
        self.elements
            .iter()
            .position(|e| e.alive && e.selector == selector)
            .map(|i| ElementId(i as u64))
    }

    fn resolve_all(&self, selector: &str) -> Vec<ElementId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, e)| e.alive && e.selector == selector)
            .map(|(i, _)| ElementId(i as u64))
            .collect()
    }

    fn set_style(&mut self, el: ElementId, prop: StyleProp, value: f64) {
        if self.live_mut(el).is_none() {
            return;
        }
        self.elements[el.0 as usize].styles.insert(prop, value);
        self.mutations.push(Mutation::Style {
            element: el,
            prop,
            value,
        });
    }

    fn set_attr(&mut self, el: ElementId, name: &str, value: &str) {
        if self.live_mut(el).is_none() {
            return;
        }
        self.elements[el.0 as usize]
            .attrs
            .insert(name.to_string(), value.to_string());
        self.mutations.push(Mutation::Attr {
            element: el,
            name: name.to_string(),
            value: value.to_string(),
        });
    }

    fn add_class(&mut self, el: ElementId, class: &str) {
        let Some(e) = self.live_mut(el) else {
            return;
        };
        if e.classes.iter().any(|c| c == class) {
            return;
        }
        e.classes.push(class.to_string());
        self.mutations.push(Mutation::Class {
            element: el,
            class: class.to_string(),
        });
    }

    fn attr(&self, el: ElementId, name: &str) -> Option<String> {
        self.live(el)?.attrs.get(name).cloned()
    }
}
