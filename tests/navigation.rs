//! Mount host navigation tests: last navigation wins, failures surface.

use std::sync::Arc;

use view_router::navigation::{MountHost, NavigationError, NavigationOutcome};
use view_router::routing::ResolveError;

mod common;
use common::{resolver_with, TestLoader};

fn host_with(loader: Arc<TestLoader>, initial: &str) -> Arc<MountHost> {
    let resolver = resolver_with(loader, 1000);
    Arc::new(MountHost::new(resolver, initial).unwrap())
}

#[tokio::test]
async fn test_stale_navigation_discarded() {
    let loader = Arc::new(TestLoader::new().gated("ManagerProduct"));
    let host = host_with(loader.clone(), "/");
    host.start().await.unwrap();

    let h = host.clone();
    let first = tokio::spawn(async move { h.navigate("/manager-product").await });
    loader.wait_for_call("ManagerProduct").await;

    let second = host.navigate("/manager-user").await.unwrap();
    assert!(second.is_mounted());
    assert_eq!(host.mounted().unwrap().view.id().as_str(), "ManagerUser");

    loader.release("ManagerProduct");
    match first.await.unwrap().unwrap() {
        NavigationOutcome::Superseded {
            ticket,
            current_path,
        } => {
            assert_eq!(ticket.path, "/manager-product");
            assert_eq!(current_path, "/manager-user");
        }
        other => panic!("expected superseded, got {:?}", other),
    }

    // The stale load still completed and is cached for later.
    assert_eq!(host.mounted().unwrap().view.id().as_str(), "ManagerUser");
    assert!(host
        .resolver()
        .cache()
        .is_loaded(&"ManagerProduct".into()));
}

#[tokio::test]
async fn test_latest_failure_surfaces() {
    let loader = Arc::new(TestLoader::new().failing("ManagerUser", "chunk load error"));
    let host = host_with(loader, "/");
    host.start().await.unwrap();

    let err = host.navigate("/manager-user").await.unwrap_err();
    assert!(matches!(
        err,
        NavigationError::Resolve(ResolveError::LoadFailure { .. })
    ));

    // The previous view stays mounted; the failure is reported, not hidden.
    assert_eq!(host.mounted().unwrap().view.id().as_str(), "Dashboard");
    assert_eq!(host.state().current_path().as_str(), "/manager-user");
}

#[tokio::test]
async fn test_stale_failure_discarded() {
    let loader = Arc::new(
        TestLoader::new()
            .gated("ManagerProduct")
            .failing("ManagerProduct", "network error"),
    );
    let host = host_with(loader.clone(), "/");

    let h = host.clone();
    let first = tokio::spawn(async move { h.navigate("/manager-product").await });
    loader.wait_for_call("ManagerProduct").await;

    host.navigate("/dashboard").await.unwrap();
    loader.release("ManagerProduct");

    let outcome = first.await.unwrap().unwrap();
    assert!(!outcome.is_mounted());
    assert_eq!(host.mounted().unwrap().view.id().as_str(), "Dashboard");
}

#[tokio::test]
async fn test_history_back_re_resolves_from_cache() {
    let loader = Arc::new(TestLoader::new());
    let host = host_with(loader.clone(), "/dashboard");
    host.start().await.unwrap();

    host.navigate("/manager-product").await.unwrap();
    host.navigate("/does/not/exist?x=1").await.unwrap();
    assert_eq!(host.location(), "/does/not/exist");
    assert_eq!(host.mounted().unwrap().view.id().as_str(), "NotFound");

    host.back().await.unwrap().unwrap();
    host.back().await.unwrap().unwrap();
    assert_eq!(host.mounted().unwrap().view.id().as_str(), "Dashboard");
    assert!(host.back().await.unwrap().is_none());

    assert_eq!(loader.calls("Dashboard"), 1);
    assert_eq!(loader.calls("ManagerProduct"), 1);
}

#[tokio::test]
async fn test_generations_increase() {
    let loader = Arc::new(TestLoader::new());
    let host = host_with(loader, "/");

    host.start().await.unwrap();
    host.navigate("/manager-user").await.unwrap();
    host.navigate("/").await.unwrap();

    let mounted = host.mounted().unwrap();
    assert_eq!(mounted.ticket.generation, 3);
    assert_eq!(host.state().generation(), 3);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_navigations_mount_in_issue_order() {
    for _ in 0..200 {
        let loader = Arc::new(TestLoader::new());
        let host = host_with(loader, "/");
        host.start().await.unwrap();

        let tasks: Vec<_> = ["/manager-product", "/manager-user"]
            .into_iter()
            .map(|path| {
                let ticket = host.begin_navigation(path).unwrap();
                let host = host.clone();
                tokio::spawn(async move { host.complete(ticket).await })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        assert_eq!(host.mounted().unwrap().view.id().as_str(), "ManagerUser");
        assert_eq!(host.location(), "/manager-user");
        assert_eq!(host.state().current_path(), "/manager-user");
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_navigations_agree_on_winner() {
    let paths = ["/dashboard", "/manager-product", "/manager-user", "/x/y", "/"];

    for _ in 0..100 {
        let loader = Arc::new(TestLoader::new());
        let host = host_with(loader, "/");

        let tasks: Vec<_> = paths
            .into_iter()
            .map(|path| {
                let host = host.clone();
                tokio::spawn(async move { host.navigate(path).await })
            })
            .collect();

        let mut mounted_outcomes = Vec::new();
        for task in tasks {
            if let NavigationOutcome::Mounted(m) = task.await.unwrap().unwrap() {
                mounted_outcomes.push(m);
            }
        }

        let mounted = host.mounted().unwrap();
        let snapshot = host.state().snapshot();
        assert_eq!(mounted.ticket.generation, snapshot.generation);
        assert_eq!(mounted.ticket.path, snapshot.path);
        assert_eq!(host.location(), snapshot.path);

        // Anything reported as mounted was mounted at some point, and nothing
        // newer than the final mount claims to be mounted.
        assert!(mounted_outcomes
            .iter()
            .all(|m| m.ticket.generation <= mounted.ticket.generation));
        assert!(mounted_outcomes.iter().any(|m| Arc::ptr_eq(m, &mounted)));
    }
}
