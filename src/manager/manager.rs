use std::collections::HashMap;
use std::fs::File;
use std::io::{
    BufReader,
    Read
};
use std::path::Path;
use std::sync::Arc;

use super::managererror::{
    ManagerError,
    parse_json_value
};


/// Named objects, shared behind `Arc`.
pub struct Manager<V: ?Sized> {
    map: HashMap<String, Arc<V>>
}

impl<V: ?Sized> Manager<V> {
    pub fn new() -> Manager<V> {
        Manager { map: HashMap::new() }
    }

    pub fn get(&self, name: &str) -> Result<Arc<V>, ManagerError> {
        self.map
            .get(name)
            .cloned()
            .ok_or_else(|| ManagerError::NameNotFoundError(name.to_owned()))
    }

    pub fn insert(&mut self, name: String, obj: Arc<V>) {
        self.map.insert(name, obj);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    /// Sorted keys.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.map.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<V: ?Sized> Default for Manager<V> {
    fn default() -> Self {
        Manager::new()
    }
}


/// Turns JSON descriptions into objects stored in a `Manager`.
pub trait IManager<V: ?Sized> {
    fn insert_obj_from_json(&self,
                            manager: &mut Manager<V>,
                            json_value: serde_json::Value) -> Result<(), ManagerError>;

    fn insert_obj_from_json_vec(&self,
                                manager: &mut Manager<V>,
                                json_vec: &[serde_json::Value]) -> Result<(), ManagerError> {
        for j in json_vec.iter() {
            self.insert_obj_from_json(manager, j.clone())?;
        }
        Ok(())
    }

    /// Accepts either a single object or an array of objects.
    fn from_reader<R: Read>(&self,
                            manager: &mut Manager<V>,
                            reader: R) -> Result<(), ManagerError> where Self: Sized {
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        if json_value.is_array() {
            let json_array: Vec<serde_json::Value> = parse_json_value(json_value)?;
            self.insert_obj_from_json_vec(manager, &json_array)
        } else {
            self.insert_obj_from_json(manager, json_value)
        }
    }

    fn from_file(&self,
                 manager: &mut Manager<V>,
                 file_path: &Path) -> Result<(), ManagerError> where Self: Sized {
        let file = File::open(file_path)?;
        self.from_reader(manager, BufReader::new(file))
    }
}


#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Deserialize)]
    struct Entry {
        name: String,
        value: u32
    }

    struct EntryLoader;

    impl IManager<u32> for EntryLoader {
        fn insert_obj_from_json(&self,
                                manager: &mut Manager<u32>,
                                json_value: serde_json::Value) -> Result<(), ManagerError> {
            let entry: Entry = parse_json_value(json_value)?;
            manager.insert(entry.name, Arc::new(entry.value));
            Ok(())
        }
    }

    #[test]
    fn loads_array_and_single_object() {
        let mut manager = Manager::new();
        EntryLoader.from_reader(&mut manager, r#"[{"name": "b", "value": 2}, {"name": "a", "value": 1}]"#.as_bytes()).unwrap();
        EntryLoader.from_reader(&mut manager, r#"{"name": "c", "value": 3}"#.as_bytes()).unwrap();
        assert_eq!(manager.names(), vec!["a", "b", "c"]);
        assert_eq!(*manager.get("b").unwrap(), 2);
    }

    #[test]
    fn missing_name_is_an_error() {
        let manager: Manager<u32> = Manager::new();
        assert!(matches!(manager.get("zz"), Err(ManagerError::NameNotFoundError(name)) if name == "zz"));
    }
}
