//! End-to-end reconciliation scenarios against a fake remote and a real
//! on-disk workspace.

use std::path::{Path, PathBuf};

use git2::Repository;
use tempfile::TempDir;

use hubsync_core::{RemoteError, RemoteFork, RemoteOrg, RemoteRepo, RemoteSource};
use hubsync_sync::{Prompt, Reconciler, SyncError, SyncOptions};
use hubsync_workspace::Workspace;

// ---------------------------------------------------------------------------
// Test doubles
// ---------------------------------------------------------------------------

/// In-memory remote: a list of orgs, each with a list of repos.
#[derive(Default)]
struct FakeRemote {
    orgs: Vec<(RemoteOrg, Vec<RemoteRepo>)>,
}

impl FakeRemote {
    fn with_org(mut self, name: &str, repos: Vec<RemoteRepo>) -> Self {
        let org = RemoteOrg {
            name: name.to_string(),
            url: format!("fake://orgs/{name}"),
        };
        self.orgs.push((org, repos));
        self
    }
}

impl RemoteSource for FakeRemote {
    fn organizations(&self) -> Result<Vec<RemoteOrg>, RemoteError> {
        Ok(self.orgs.iter().map(|(org, _)| org.clone()).collect())
    }

    fn repos(&self, org: &RemoteOrg) -> Result<Vec<RemoteRepo>, RemoteError> {
        Ok(self
            .orgs
            .iter()
            .find(|(o, _)| o.name == org.name)
            .map(|(_, repos)| repos.clone())
            .unwrap_or_default())
    }

    fn forks(&self, _repo: &RemoteRepo) -> Result<Vec<RemoteFork>, RemoteError> {
        Ok(Vec::new())
    }
}

/// Answers every confirmation with its default.
struct AcceptDefaults;
impl Prompt for AcceptDefaults {
    fn confirm(&mut self, _question: &str, default: bool) -> Result<bool, SyncError> {
        Ok(default)
    }
}

/// Pops scripted answers front-to-back; panics when the script runs dry.
struct ScriptedPrompt {
    answers: Vec<bool>,
}

impl ScriptedPrompt {
    fn new(answers: &[bool]) -> Self {
        Self {
            answers: answers.to_vec(),
        }
    }
}

impl Prompt for ScriptedPrompt {
    fn confirm(&mut self, question: &str, _default: bool) -> Result<bool, SyncError> {
        assert!(!self.answers.is_empty(), "unexpected prompt: {question}");
        Ok(self.answers.remove(0))
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// A local git repository with one commit, used as a clone source.
fn source_repo(parent: &Path, name: &str) -> PathBuf {
    let path = parent.join(name);
    let repo = Repository::init(&path).unwrap();
    std::fs::write(path.join("README"), "hello\n").unwrap();
    let mut index = repo.index().unwrap();
    index.add_path(Path::new("README")).unwrap();
    index.write().unwrap();
    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let sig = git2::Signature::now("hubsync test", "test@example.com").unwrap();
    repo.commit(Some("HEAD"), &sig, &sig, "init", &tree, &[])
        .unwrap();
    path
}

fn remote_repo(name: &str, clone_url: &Path) -> RemoteRepo {
    RemoteRepo {
        name: name.to_string(),
        owner: "sample_org".to_string(),
        clone_url: clone_url.to_string_lossy().into_owned(),
        url: format!("fake://repos/sample_org/{name}"),
    }
}

fn run(
    workspace_root: &Path,
    remote: &FakeRemote,
    prompt: &mut dyn Prompt,
    options: SyncOptions,
) -> hubsync_sync::SyncReport {
    let workspace = Workspace::new(workspace_root);
    Reconciler::new(remote, prompt, options)
        .run(&workspace)
        .unwrap()
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn empty_workspace_and_empty_remote_change_nothing() {
    let tmp = TempDir::new().unwrap();
    let ws = tmp.path().join("workspace");
    std::fs::create_dir(&ws).unwrap();

    let report = run(
        &ws,
        &FakeRemote::default(),
        &mut AcceptDefaults,
        SyncOptions::default(),
    );
    assert!(report.is_noop());
    assert!(std::fs::read_dir(&ws).unwrap().next().is_none());
}

#[test]
fn matching_empty_org_is_left_unchanged() {
    let tmp = TempDir::new().unwrap();
    let ws = tmp.path().join("workspace");
    std::fs::create_dir_all(ws.join("sample_org")).unwrap();

    let remote = FakeRemote::default().with_org("sample_org", vec![]);
    let report = run(&ws, &remote, &mut AcceptDefaults, SyncOptions::default());

    assert!(report.is_noop());
    assert!(ws.join("sample_org").is_dir());
}

#[test]
fn remote_only_org_and_repo_are_created_and_cloned() {
    let tmp = TempDir::new().unwrap();
    let ws = tmp.path().join("workspace");
    std::fs::create_dir(&ws).unwrap();
    let canonical = source_repo(tmp.path(), "canonical");

    let remote = FakeRemote::default()
        .with_org("sample_org", vec![remote_repo("sample_repo", &canonical)]);
    let report = run(&ws, &remote, &mut AcceptDefaults, SyncOptions::default());

    assert_eq!(report.orgs_created, ["sample_org"]);
    assert_eq!(report.repos_cloned, ["sample_org/sample_repo"]);
    assert!(report.failures.is_empty());

    let checkout = ws.join("sample_org").join("sample_repo");
    let repo = Repository::open(&checkout).unwrap();
    let origin = repo.find_remote("origin").unwrap();
    assert_eq!(origin.pushurl(), Some("nopush"));
    assert!(repo.find_remote("upstream").is_ok());
    assert!(checkout.join("README").is_file());
}

#[test]
fn second_run_is_idempotent() {
    let tmp = TempDir::new().unwrap();
    let ws = tmp.path().join("workspace");
    std::fs::create_dir(&ws).unwrap();
    let canonical = source_repo(tmp.path(), "canonical");

    let remote = FakeRemote::default()
        .with_org("sample_org", vec![remote_repo("sample_repo", &canonical)]);

    let first = run(&ws, &remote, &mut AcceptDefaults, SyncOptions::default());
    assert_eq!(first.repos_cloned.len(), 1);

    let second = run(&ws, &remote, &mut AcceptDefaults, SyncOptions::default());
    assert!(second.is_noop());
}

#[test]
fn declined_clone_leaves_the_workspace_alone() {
    let tmp = TempDir::new().unwrap();
    let ws = tmp.path().join("workspace");
    std::fs::create_dir_all(ws.join("sample_org")).unwrap();
    let canonical = source_repo(tmp.path(), "canonical");

    let remote = FakeRemote::default()
        .with_org("sample_org", vec![remote_repo("sample_repo", &canonical)]);
    let mut prompt = ScriptedPrompt::new(&[false]);
    let report = run(&ws, &remote, &mut prompt, SyncOptions::default());

    assert!(report.repos_cloned.is_empty());
    assert!(!ws.join("sample_org").join("sample_repo").exists());
}

#[test]
fn local_only_org_survives_a_declined_delete() {
    let tmp = TempDir::new().unwrap();
    let ws = tmp.path().join("workspace");
    std::fs::create_dir_all(ws.join("leftover_org")).unwrap();

    let report = run(
        &ws,
        &FakeRemote::default(),
        &mut AcceptDefaults, // delete defaults to "no"
        SyncOptions::default(),
    );
    assert!(report.orgs_deleted.is_empty());
    assert!(ws.join("leftover_org").is_dir());
}

#[test]
fn local_only_org_is_deleted_on_confirmation() {
    let tmp = TempDir::new().unwrap();
    let ws = tmp.path().join("workspace");
    std::fs::create_dir_all(ws.join("leftover_org").join("junk")).unwrap();

    let mut prompt = ScriptedPrompt::new(&[true]);
    let report = run(&ws, &FakeRemote::default(), &mut prompt, SyncOptions::default());

    assert_eq!(report.orgs_deleted, ["leftover_org"]);
    assert!(!ws.join("leftover_org").exists());
}

#[test]
fn local_only_repo_is_deleted_on_confirmation() {
    let tmp = TempDir::new().unwrap();
    let ws = tmp.path().join("workspace");
    let org_dir = ws.join("sample_org");
    std::fs::create_dir_all(&org_dir).unwrap();
    Repository::init(org_dir.join("leftover_repo")).unwrap();

    let remote = FakeRemote::default().with_org("sample_org", vec![]);
    let mut prompt = ScriptedPrompt::new(&[true]);
    let report = run(&ws, &remote, &mut prompt, SyncOptions::default());

    assert_eq!(report.repos_deleted, ["sample_org/leftover_repo"]);
    assert!(!org_dir.join("leftover_repo").exists());
}

#[test]
fn org_hooks_run_in_the_org_directory() {
    let tmp = TempDir::new().unwrap();
    let ws = tmp.path().join("workspace");
    let org_dir = ws.join("sample_org");
    std::fs::create_dir_all(&org_dir).unwrap();

    let remote = FakeRemote::default().with_org("sample_org", vec![]);
    let mut options = SyncOptions::default();
    options.org_hooks.pre = "touch test.pre".to_string();
    options.org_hooks.post = "mkdir test.post".to_string();

    run(&ws, &remote, &mut AcceptDefaults, options);

    assert!(org_dir.join("test.pre").is_file());
    assert!(org_dir.join("test.post").is_dir());
}

#[test]
fn repo_hooks_run_in_the_repo_directory() {
    let tmp = TempDir::new().unwrap();
    let ws = tmp.path().join("workspace");
    let org_dir = ws.join("sample_org");
    std::fs::create_dir_all(&org_dir).unwrap();
    let canonical = source_repo(tmp.path(), "canonical");
    let checkout = org_dir.join("sample_repo");
    Repository::clone(canonical.to_str().unwrap(), &checkout).unwrap();

    let remote = FakeRemote::default()
        .with_org("sample_org", vec![remote_repo("sample_repo", &canonical)]);
    let mut options = SyncOptions::default();
    options.repo_hooks.pre = "touch test.pre".to_string();

    run(&ws, &remote, &mut AcceptDefaults, options);

    assert!(checkout.join("test.pre").is_file());
}

#[test]
fn case_insensitive_matching_pairs_differently_cased_names() {
    let tmp = TempDir::new().unwrap();
    let ws = tmp.path().join("workspace");
    std::fs::create_dir_all(ws.join("Sample_Org")).unwrap();

    let remote = FakeRemote::default().with_org("sample_org", vec![]);
    let options = SyncOptions {
        case_sensitive: false,
        ..SyncOptions::default()
    };
    let report = run(&ws, &remote, &mut AcceptDefaults, options);

    // Paired, so neither a create nor a delete is proposed.
    assert!(report.is_noop());
    assert!(ws.join("Sample_Org").is_dir());
}

#[test]
fn one_broken_repo_does_not_stop_its_siblings() {
    let tmp = TempDir::new().unwrap();
    let ws = tmp.path().join("workspace");
    std::fs::create_dir_all(ws.join("sample_org")).unwrap();
    let canonical = source_repo(tmp.path(), "canonical");

    // First repo's clone URL points nowhere; the second is fine.
    let broken = remote_repo("aaa_broken", &tmp.path().join("missing"));
    let good = remote_repo("zzz_good", &canonical);
    let remote = FakeRemote::default().with_org("sample_org", vec![broken, good]);

    let report = run(&ws, &remote, &mut AcceptDefaults, SyncOptions::default());

    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].subject, "sample_org/aaa_broken");
    assert_eq!(report.repos_cloned, ["sample_org/zzz_good"]);
    assert!(ws.join("sample_org").join("zzz_good").is_dir());
}
