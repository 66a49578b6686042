use anyhow::anyhow;
use anyhow::bail;
use anyhow::Result;
use rustc_hash::FxHashMap;

/// Items addressed by a numeric id in insertion order and, optionally, by name.
#[derive(Debug)]
pub struct Storage<T> {
    data: Vec<T>,
    name_to_id_hashmap: FxHashMap<String, usize>,
}

impl<T> Storage<T> {
    pub fn store(&mut self, item: T) -> usize {
        self.data.push(item);
        self.data.len() - 1
    }

    pub fn store_with_name(&mut self, name: &str, item: T) -> Result<usize> {
        if self.name_to_id_hashmap.contains_key(name) {
            bail!("Name {} already exists", name);
        }

        let id = self.store(item);
        self.name_to_id_hashmap.insert(name.to_string(), id);

        Ok(id)
    }

    pub fn contains_by_name(&self, name: &str) -> bool {
        self.name_to_id_hashmap.contains_key(name)
    }

    pub fn get(&self, id: usize) -> Result<&T> {
        self.data.get(id).ok_or_else(|| anyhow!("Storage item {} not found", id))
    }

    pub fn get_mut(&mut self, id: usize) -> Result<&mut T> {
        self.data.get_mut(id).ok_or_else(|| anyhow!("Storage item {} not found", id))
    }

    pub fn get_id(&self, name: &str) -> Result<usize> {
        match self.name_to_id_hashmap.get(name) {
            Some(id) => Ok(*id),
            None => bail!("Storage item {} not found", name),
        }
    }

    pub fn get_by_name(&self, name: &str) -> Result<&T> {
        self.get(self.get_id(name)?)
    }

    pub fn get_by_name_mut(&mut self, name: &str) -> Result<&mut T> {
        self.get_mut(self.get_id(name)?)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T> Default for Storage<T> {
    fn default() -> Self {
        Self { data: Vec::default(), name_to_id_hashmap: FxHashMap::default() }
    }
}
