//! Hand-built loose-object stores for tests
//!
//! Objects are written the way git writes them: `<kind> <size>\0<payload>`,
//! zlib-compressed, named by the SHA-1 of the uncompressed bytes.

use assert_fs::TempDir;
use flate2::Compression;
use flate2::write::ZlibEncoder;
use rstest::fixture;
use sha1::{Digest, Sha1};
use std::io::Write;
use std::path::{Path, PathBuf};

pub const AUTHOR: &str = "Jane Doe <jane@example.com> 1700000000 +0000";
pub const AUTHOR_IDENTITY: &str = "Jane Doe <jane@example.com>";

pub struct StoreBuilder {
    git_dir: PathBuf,
}

impl StoreBuilder {
    /// Create an empty `.git/objects` under `dir`
    pub fn init(dir: &Path) -> Self {
        let git_dir = dir.join(".git");
        std::fs::create_dir_all(git_dir.join("objects"))
            .unwrap_or_else(|e| panic!("Failed to create objects dir: {e}"));
        StoreBuilder { git_dir }
    }

    pub fn git_dir(&self) -> &Path {
        &self.git_dir
    }

    pub fn object_path(&self, oid: &str) -> PathBuf {
        self.git_dir.join("objects").join(&oid[..2]).join(&oid[2..])
    }

    pub fn write_object(&self, kind: &str, payload: &[u8]) -> String {
        let raw = Self::frame(kind, payload);
        let oid = format!("{:x}", Sha1::digest(&raw));
        self.write_compressed_at(&oid, &raw);
        oid
    }

    /// Store an object under a chosen id, ignoring its content hash
    pub fn write_object_at(&self, oid: &str, kind: &str, payload: &[u8]) {
        self.write_compressed_at(oid, &Self::frame(kind, payload));
    }

    pub fn write_compressed_at(&self, oid: &str, raw: &[u8]) {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(raw).expect("Failed to compress object");
        let compressed = encoder.finish().expect("Failed to compress object");
        self.write_file_at(oid, &compressed);
    }

    pub fn write_file_at(&self, oid: &str, content: &[u8]) {
        let path = self.object_path(oid);
        std::fs::create_dir_all(path.parent().expect("object path has a parent"))
            .unwrap_or_else(|e| panic!("Failed to create object dir: {e}"));
        std::fs::write(&path, content)
            .unwrap_or_else(|e| panic!("Failed to write object {:?}: {}", path, e));
    }

    pub fn write_blob(&self, content: &str) -> String {
        self.write_object("blob", content.as_bytes())
    }

    /// `entries` are `(mode, name, oid)` triples, written in the given order
    pub fn write_tree(&self, entries: &[(&str, &str, &str)]) -> String {
        self.write_object("tree", &tree_payload(entries))
    }

    pub fn write_commit(&self, tree: &str, parents: &[&str], message: &str) -> String {
        self.write_object("commit", commit_payload(tree, parents, message).as_bytes())
    }

    pub fn write_branch(&self, name: &str, oid: &str) {
        let path = self.git_dir.join("refs").join("heads").join(name);
        std::fs::create_dir_all(path.parent().expect("ref path has a parent"))
            .unwrap_or_else(|e| panic!("Failed to create refs dir: {e}"));
        std::fs::write(&path, format!("{oid}\n"))
            .unwrap_or_else(|e| panic!("Failed to write ref {:?}: {}", path, e));
    }

    fn frame(kind: &str, payload: &[u8]) -> Vec<u8> {
        let mut raw = format!("{kind} {}\0", payload.len()).into_bytes();
        raw.extend_from_slice(payload);
        raw
    }
}

pub fn tree_payload(entries: &[(&str, &str, &str)]) -> Vec<u8> {
    let mut payload = Vec::new();
    for (mode, name, oid) in entries {
        payload.extend_from_slice(format!("{mode} {name}\0").as_bytes());
        payload.extend(hex::decode(oid).expect("tree entry oid is hex"));
    }
    payload
}

pub fn commit_payload(tree: &str, parents: &[&str], message: &str) -> String {
    let mut payload = format!("tree {tree}\n");
    for parent in parents {
        payload.push_str(&format!("parent {parent}\n"));
    }
    payload.push_str(&format!("author {AUTHOR}\ncommitter {AUTHOR}\n\n{message}\n"));
    payload
}

/// A commit chain built oldest first
pub struct LinearHistory {
    /// Commit ids, oldest first
    pub commits: Vec<String>,
    /// Root tree id of each commit, same order
    pub trees: Vec<String>,
}

impl LinearHistory {
    pub fn tip(&self) -> &str {
        self.commits.last().expect("history is not empty")
    }
}

/// Build `len` commits, each adding one file, and point `main` at the last
pub fn build_linear_history(store: &StoreBuilder, len: usize) -> LinearHistory {
    let mut history = LinearHistory {
        commits: Vec::new(),
        trees: Vec::new(),
    };
    let mut blobs: Vec<(String, String)> = Vec::new();

    for i in 1..=len {
        let name = format!("file{i}.txt");
        blobs.push((name, store.write_blob(&format!("content {i}\n"))));

        let entries = blobs
            .iter()
            .map(|(name, oid)| ("100644", name.as_str(), oid.as_str()))
            .collect::<Vec<_>>();
        let tree = store.write_tree(&entries);

        let parents = history
            .commits
            .last()
            .map(|parent| vec![parent.as_str()])
            .unwrap_or_default();
        let commit = store.write_commit(&tree, &parents, &format!("Commit {i}"));

        history.trees.push(tree);
        history.commits.push(commit);
    }

    store.write_branch("main", history.tip());
    history
}

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}
