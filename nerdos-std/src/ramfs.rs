use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use log::debug;
use spin::Mutex;

use crate::fs::{FileSystem, FsError};
use crate::path;

#[derive(Debug)]
enum Node {
    Directory(BTreeMap<String, Node>),
    File(String),
}

impl Node {
    fn empty_directory() -> Self {
        Node::Directory(BTreeMap::new())
    }
}

fn lookup<'n>(node: &'n Node, components: &[&str]) -> Option<&'n Node> {
    components.iter().try_fold(node, |node, name| match node {
        Node::Directory(children) => children.get(*name),
        Node::File(_) => None,
    })
}

fn lookup_mut<'n>(node: &'n mut Node, components: &[&str]) -> Option<&'n mut Node> {
    components.iter().try_fold(node, |node, name| match node {
        Node::Directory(children) => children.get_mut(*name),
        Node::File(_) => None,
    })
}

/// A volume that lives entirely in memory. Its contents are gone once the
/// value is dropped.
#[derive(Debug)]
pub struct RamFs {
    volume: String,
    root: Mutex<Node>,
}

impl RamFs {
    pub fn new() -> Self {
        Self::with_volume(path::DEFAULT_VOLUME)
    }

    /// `volume` is the drive label including the colon, e.g. `"0:"`.
    pub fn with_volume(volume: &str) -> Self {
        Self {
            volume: String::from(volume),
            root: Mutex::new(Node::empty_directory()),
        }
    }

    pub fn volume(&self) -> &str {
        &self.volume
    }

    /// Components of `path` below the volume root, or `None` when the path
    /// belongs to another volume.
    fn resolve<'p>(&self, path: &'p str) -> Option<Vec<&'p str>> {
        let (volume, components) = path::components(path);
        if volume.eq_ignore_ascii_case(&self.volume) {
            Some(components)
        } else {
            None
        }
    }

    fn with_node<T>(&self, path: &str, f: impl FnOnce(Option<&Node>) -> T) -> T {
        let root = self.root.lock();
        match self.resolve(path) {
            Some(components) => f(lookup(&root, &components)),
            None => f(None),
        }
    }

    /// Runs `f` against the children of the parent directory of `path` and
    /// the final component name.
    fn with_parent<T>(
        &self,
        path: &str,
        f: impl FnOnce(&mut BTreeMap<String, Node>, &str) -> Result<T, FsError>,
    ) -> Result<T, FsError> {
        let normalized = path::normalize(path);
        let components = self
            .resolve(path)
            .ok_or_else(|| FsError::NotFound(normalized.clone()))?;
        let (name, parent) = components
            .split_last()
            .ok_or_else(|| FsError::InvalidPath(normalized.clone()))?;

        let mut root = self.root.lock();
        match lookup_mut(&mut root, parent) {
            Some(Node::Directory(children)) => f(children, *name),
            Some(Node::File(_)) => Err(FsError::NotADirectory(parent_of(&normalized))),
            None => Err(FsError::NotFound(parent_of(&normalized))),
        }
    }
}

impl Default for RamFs {
    fn default() -> Self {
        Self::new()
    }
}

fn parent_of(normalized: &str) -> String {
    path::normalize(&path::join(normalized, ".."))
}

impl FileSystem for RamFs {
    fn directory_exists(&self, path: &str) -> bool {
        self.with_node(path, |node| matches!(node, Some(Node::Directory(_))))
    }

    fn file_exists(&self, path: &str) -> bool {
        self.with_node(path, |node| matches!(node, Some(Node::File(_))))
    }

    fn create_directory(&self, path: &str) -> Result<(), FsError> {
        let normalized = path::normalize(path);
        let components = self
            .resolve(path)
            .ok_or_else(|| FsError::NotFound(normalized.clone()))?;

        let mut root = self.root.lock();
        let mut node = &mut *root;
        for name in components {
            node = match node {
                Node::Directory(children) => children
                    .entry(String::from(name))
                    .or_insert_with(Node::empty_directory),
                Node::File(_) => return Err(FsError::NotADirectory(normalized)),
            };
        }

        match node {
            Node::Directory(_) => {
                debug!("ramfs: directory {} ready", normalized);
                Ok(())
            }
            Node::File(_) => Err(FsError::AlreadyExists(normalized)),
        }
    }

    fn delete_directory(&self, path: &str) -> Result<(), FsError> {
        let normalized = path::normalize(path);
        self.with_parent(path, |children, name| match children.get(name) {
            Some(Node::Directory(_)) => {
                children.remove(name);
                debug!("ramfs: removed directory {}", normalized);
                Ok(())
            }
            Some(Node::File(_)) => Err(FsError::NotADirectory(normalized.clone())),
            None => Err(FsError::NotFound(normalized.clone())),
        })
    }

    fn list_directories(&self, path: &str) -> Result<Vec<String>, FsError> {
        list_children(self, path, |node| matches!(node, Node::Directory(_)))
    }

    fn list_files(&self, path: &str) -> Result<Vec<String>, FsError> {
        list_children(self, path, |node| matches!(node, Node::File(_)))
    }

    fn read_to_string(&self, path: &str) -> Result<String, FsError> {
        self.with_node(path, |node| match node {
            Some(Node::File(contents)) => Ok(contents.clone()),
            Some(Node::Directory(_)) => Err(FsError::IsADirectory(path::normalize(path))),
            None => Err(FsError::NotFound(path::normalize(path))),
        })
    }

    fn write_string(&self, path: &str, contents: &str) -> Result<(), FsError> {
        let normalized = path::normalize(path);
        self.with_parent(path, |children, name| match children.get_mut(name) {
            Some(Node::Directory(_)) => Err(FsError::IsADirectory(normalized.clone())),
            Some(Node::File(existing)) => {
                existing.clear();
                existing.push_str(contents);
                Ok(())
            }
            None => {
                children.insert(String::from(name), Node::File(String::from(contents)));
                Ok(())
            }
        })
        .map_err(|error| match error {
            FsError::InvalidPath(root) => FsError::IsADirectory(root),
            other => other,
        })
    }

    fn delete_file(&self, path: &str) -> Result<(), FsError> {
        let normalized = path::normalize(path);
        self.with_parent(path, |children, name| match children.get(name) {
            Some(Node::File(_)) => {
                children.remove(name);
                Ok(())
            }
            Some(Node::Directory(_)) => Err(FsError::IsADirectory(normalized.clone())),
            None => Err(FsError::NotFound(normalized.clone())),
        })
    }
}

fn list_children(
    fs: &RamFs,
    path: &str,
    keep: impl Fn(&Node) -> bool,
) -> Result<Vec<String>, FsError> {
    let normalized = path::normalize(path);
    fs.with_node(path, |node| match node {
        Some(Node::Directory(children)) => Ok(children
            .iter()
            .filter(|(_, child)| keep(*child))
            .map(|(name, _)| path::join(&normalized, name))
            .collect()),
        Some(Node::File(_)) => Err(FsError::NotADirectory(normalized.clone())),
        None => Err(FsError::NotFound(normalized.clone())),
    })
}
