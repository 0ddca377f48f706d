use std::path::{Path, PathBuf};
use std::sync::Arc;

use projkit_adapters::LegacyProjectAdapter;
use projkit_core::adapter::ProjectAdapter;
use projkit_core::error::Error;
use projkit_core::framework::{FrameworkIdentifier, MonikerResolver};
use projkit_core::host::{TARGET_FRAMEWORK_MONIKER_PROPERTY, TARGET_FRAMEWORK_PROPERTY};
use projkit_core::items::{PROJECT_REFERENCE_ITEM, VERSION_METADATA};
use projkit_core::metadata::{metadata_from_pairs, MetadataMap};
use projkit_core::project::{ProjectIdentity, ProjectKind};
use projkit_core::reference::DependencyProjectRef;
use projkit_host::{MemoryHost, MemoryItemStore};
use semver::Version;

fn identity(name: &str) -> ProjectIdentity {
    ProjectIdentity::new(
        name.to_string(),
        format!("src/{name}/{name}.proj"),
        PathBuf::from(format!("/work/src/{name}/{name}.proj")),
        PathBuf::from(format!("/work/src/{name}/obj")),
    )
}

fn fixture() -> (Arc<MemoryHost>, Arc<MemoryItemStore>, LegacyProjectAdapter) {
    let host = Arc::new(MemoryHost::new(identity("Alpha"), ProjectKind::Legacy));
    let store = Arc::new(MemoryItemStore::new());
    let adapter = LegacyProjectAdapter::new(
        host.clone(),
        store.clone(),
        Arc::new(MonikerResolver),
    )
    .unwrap();
    (host, store, adapter)
}

#[test]
fn test_identity_and_capabilities() {
    let (_host, _store, adapter) = fixture();

    assert_eq!(adapter.name(), "Alpha");
    assert_eq!(adapter.unique_name(), "src/Alpha/Alpha.proj");
    assert_eq!(adapter.full_path(), Path::new("/work/src/Alpha/Alpha.proj"));
    assert_eq!(adapter.base_intermediate_path(), Path::new("/work/src/Alpha/obj"));

    let capabilities = adapter.capabilities();
    assert!(!capabilities.supports_reference_enumeration);
    assert!(capabilities.legacy_package_references);
}

#[tokio::test]
async fn test_empty_store_yields_empty_sequences() {
    let (_host, _store, adapter) = fixture();

    let packages = adapter.legacy_package_references(&["Version"]).await.unwrap();
    assert!(packages.is_empty());

    let projects = adapter.legacy_project_references(&[]).await.unwrap();
    assert!(projects.is_empty());
}

#[tokio::test]
async fn test_add_then_get_round_trip_with_defaults() {
    let (_host, _store, adapter) = fixture();

    let metadata = metadata_from_pairs(&["a", "b"], &["1", "2"]).unwrap();
    adapter
        .add_or_update_legacy_package("Foo", "1.0.0", metadata)
        .await
        .unwrap();

    let packages = adapter
        .legacy_package_references(&["a", "b", "c"])
        .await
        .unwrap();
    assert_eq!(packages.len(), 1);
    let package = &packages[0];
    assert_eq!(package.name, "Foo");
    assert_eq!(package.version, "1.0.0");
    assert_eq!(package.metadata.get("a").map(String::as_str), Some("1"));
    assert_eq!(package.metadata.get("b").map(String::as_str), Some("2"));
    assert_eq!(package.metadata.get("c").map(String::as_str), Some(""));
}

#[tokio::test]
async fn test_repeated_identical_add_is_idempotent() {
    let (_host, _store, adapter) = fixture();

    for _ in 0..3 {
        let metadata = metadata_from_pairs(&["PrivateAssets"], &["all"]).unwrap();
        adapter
            .add_or_update_legacy_package("Foo", "1.0.0", metadata)
            .await
            .unwrap();
    }

    let packages = adapter
        .legacy_package_references(&["PrivateAssets"])
        .await
        .unwrap();
    assert_eq!(packages.len(), 1);
    assert_eq!(packages[0].version, "1.0.0");
    assert_eq!(
        packages[0].metadata.get("PrivateAssets").map(String::as_str),
        Some("all")
    );
}

#[tokio::test]
async fn test_second_add_updates_in_place() {
    let (_host, _store, adapter) = fixture();

    adapter
        .add_or_update_legacy_package("Foo", "1.0.0", MetadataMap::new())
        .await
        .unwrap();
    adapter
        .add_or_update_legacy_package("Foo", "2.0.0", MetadataMap::new())
        .await
        .unwrap();

    let packages = adapter.legacy_package_references(&[]).await.unwrap();
    assert_eq!(packages.len(), 1);
    assert_eq!(packages[0].name, "Foo");
    assert_eq!(packages[0].version, "2.0.0");
}

#[tokio::test]
async fn test_package_matching_is_case_insensitive() {
    let (_host, _store, adapter) = fixture();

    adapter
        .add_or_update_legacy_package("Foo", "1.0.0", MetadataMap::new())
        .await
        .unwrap();
    adapter
        .add_or_update_legacy_package("FOO", "3.0.0", MetadataMap::new())
        .await
        .unwrap();

    let packages = adapter.legacy_package_references(&[]).await.unwrap();
    assert_eq!(packages.len(), 1);
    assert_eq!(packages[0].name, "Foo");
    assert_eq!(packages[0].version, "3.0.0");

    adapter.remove_legacy_package("fOo").await.unwrap();
    let packages = adapter.legacy_package_references(&[]).await.unwrap();
    assert!(packages.is_empty());
}

#[tokio::test]
async fn test_remove_of_absent_package_is_noop() {
    let (_host, _store, adapter) = fixture();

    adapter
        .add_or_update_legacy_package("Foo", "1.0.0", MetadataMap::new())
        .await
        .unwrap();

    adapter.remove_legacy_package("Never").await.unwrap();

    let packages = adapter.legacy_package_references(&[]).await.unwrap();
    assert_eq!(packages.len(), 1);
}

#[tokio::test]
async fn test_version_is_requestable_as_metadata() {
    let (_host, _store, adapter) = fixture();

    adapter
        .add_or_update_legacy_package("Foo", "1.0.0", MetadataMap::new())
        .await
        .unwrap();

    let packages = adapter
        .legacy_package_references(&[VERSION_METADATA])
        .await
        .unwrap();
    assert_eq!(
        packages[0].metadata.get(VERSION_METADATA).map(String::as_str),
        Some("1.0.0")
    );
}

#[tokio::test]
async fn test_pairs_facade_validates_arity() {
    let (_host, _store, adapter) = fixture();

    adapter
        .add_or_update_legacy_package_pairs("Foo", "1.0.0", &["a", "b"], &["1", "2"])
        .await
        .unwrap();
    let packages = adapter.legacy_package_references(&["a", "b"]).await.unwrap();
    assert_eq!(packages[0].metadata.get("b").map(String::as_str), Some("2"));

    let result = adapter
        .add_or_update_legacy_package_pairs("Bar", "1.0.0", &["a", "b"], &["1"])
        .await;
    assert!(matches!(result, Err(Error::MetadataArity { .. })));

    // Nothing was written for the rejected call.
    let packages = adapter.legacy_package_references(&[]).await.unwrap();
    assert_eq!(packages.len(), 1);
}

#[tokio::test]
async fn test_project_references_carry_requested_metadata() {
    let (_host, store, adapter) = fixture();

    let mut metadata = MetadataMap::new();
    metadata.insert("Name".to_string(), "Beta".to_string());
    store.upsert(PROJECT_REFERENCE_ITEM, "../Beta/Beta.proj", metadata);
    store.upsert(PROJECT_REFERENCE_ITEM, "../Gamma/Gamma.proj", MetadataMap::new());

    let references = adapter
        .legacy_project_references(&["Name"])
        .await
        .unwrap();
    assert_eq!(references.len(), 2);

    let beta = references
        .iter()
        .find(|r| r.project_path == "../Beta/Beta.proj")
        .unwrap();
    assert_eq!(beta.metadata.get("Name").map(String::as_str), Some("Beta"));

    let gamma = references
        .iter()
        .find(|r| r.project_path == "../Gamma/Gamma.proj")
        .unwrap();
    assert_eq!(gamma.metadata.get("Name").map(String::as_str), Some(""));
}

#[test]
fn test_referenced_projects_expose_only_their_identity() {
    let (host, _store, adapter) = fixture();
    host.add_reference(DependencyProjectRef::new(
        "src/A/A.proj".to_string(),
        PathBuf::from("/work/src/A/A.proj"),
    ));
    host.add_reference(DependencyProjectRef::new(
        "src/B/B.proj".to_string(),
        PathBuf::from("/work/src/B/B.proj"),
    ));

    let references = adapter.referenced_projects().unwrap();
    assert_eq!(references.len(), 2);
    // Order is unspecified; assert set membership only.
    assert!(references.iter().any(|r| r.unique_name == "src/A/A.proj"));
    assert!(references.iter().any(|r| r.unique_name == "src/B/B.proj"));
    assert!(references.iter().all(|r| r.unique_name != adapter.unique_name()));
}

#[tokio::test]
async fn test_target_framework_prefers_full_moniker() {
    let (host, _store, adapter) = fixture();
    host.set_property(TARGET_FRAMEWORK_MONIKER_PROPERTY, ".NETFramework,Version=v4.8");
    host.set_property(TARGET_FRAMEWORK_PROPERTY, "net6.0");

    let framework = adapter.target_framework().await.unwrap();
    assert_eq!(framework.identifier, FrameworkIdentifier::NetFramework);
    assert_eq!(framework.version, Version::new(4, 8, 0));
}

#[tokio::test]
async fn test_target_framework_falls_back_to_short_property() {
    let (host, _store, adapter) = fixture();
    host.set_property(TARGET_FRAMEWORK_PROPERTY, "netstandard2.0");

    let framework = adapter.target_framework().await.unwrap();
    assert_eq!(framework.identifier, FrameworkIdentifier::NetStandard);
}

#[tokio::test]
async fn test_missing_target_framework_fails() {
    let (_host, _store, adapter) = fixture();

    let result = adapter.target_framework().await;
    assert!(matches!(result, Err(Error::MissingTargetFramework(_))));
}

#[tokio::test]
async fn test_unparseable_target_framework_fails() {
    let (host, _store, adapter) = fixture();
    host.set_property(TARGET_FRAMEWORK_PROPERTY, "monkey");

    let result = adapter.target_framework().await;
    assert!(matches!(result, Err(Error::FrameworkResolution { .. })));
}

#[tokio::test]
async fn test_unload_mid_call_surfaces_host_failure() {
    let (host, _store, adapter) = fixture();
    host.set_property(TARGET_FRAMEWORK_PROPERTY, "net6.0");
    host.unload();

    assert!(matches!(
        adapter.target_framework().await,
        Err(Error::ProjectUnloaded(_))
    ));
    assert!(matches!(
        adapter.referenced_projects(),
        Err(Error::ProjectUnloaded(_))
    ));
}

#[test]
fn test_escape_hatch_returns_live_host_handle() {
    let (host, _store, adapter) = fixture();

    let handle = adapter.host_project();
    assert_eq!(handle.kind(), ProjectKind::Legacy);
    assert_eq!(handle.identity().unwrap().name, "Alpha");

    // The handle is the live host, not a copy: unloading through the
    // original is visible through the escape hatch.
    host.unload();
    assert!(handle.identity().is_err());
}
