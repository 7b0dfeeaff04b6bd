use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

use educore_dashboard::clock::MonotonicClock;
use educore_dashboard::filter::CatalogFilter;
use educore_dashboard::layout::Viewport;
use educore_dashboard::views::catalog::CatalogTab;
use educore_dashboard::views::{ViewAction, ViewContent, ViewInstance};
use educore_dashboard::{
    FrameBody, Fixtures, Shell, ShellConfig, ShellError, UnknownViewPolicy, ViewId,
};

fn start_shell(width: u32, config: ShellConfig) -> Shell {
    let fixtures = Arc::new(Fixtures::embedded().unwrap());
    Shell::start(
        config,
        fixtures,
        Viewport::new(width),
        Arc::new(MonotonicClock::starting_at(0)),
    )
    .unwrap()
}

fn desktop() -> Shell {
    start_shell(1280, ShellConfig::default())
}

fn catalog_filter(shell: &Shell) -> CatalogFilter {
    match shell.view_instance() {
        ViewInstance::Catalog(view) => view.filter,
        other => panic!("expected catalog, got {:?}", other.id()),
    }
}

#[tokio::test(start_paused = true)]
async fn starts_on_dashboard_behind_the_placeholder() {
    let shell = desktop();
    assert_eq!(shell.current_view(), ViewId::Dashboard);

    let frame = shell.frame();
    assert_eq!(frame.view, ViewId::Dashboard);
    assert_eq!(frame.key.refreshed_at, 0);
    assert!(frame.body.is_loading());
    assert!(!frame.compact);

    sleep(Duration::from_millis(101)).await;
    match shell.frame().body {
        FrameBody::Ready {
            content: ViewContent::Dashboard(content),
        } => assert_eq!(content.welcome.name, "Sarah"),
        other => panic!("unexpected body {:?}", other),
    }
}

#[tokio::test(start_paused = true)]
async fn navigation_shows_the_placeholder_again() {
    let shell = desktop();
    sleep(Duration::from_millis(101)).await;
    assert!(shell.is_revealed());

    shell.select_view(ViewId::Analytics);
    assert_eq!(shell.current_view(), ViewId::Analytics);
    assert_eq!(shell.gate_key().view, ViewId::Analytics);
    assert!(!shell.is_revealed());

    sleep(Duration::from_millis(101)).await;
    assert!(shell.is_revealed());
    assert!(matches!(
        shell.frame().body,
        FrameBody::Ready {
            content: ViewContent::Analytics(_)
        }
    ));
}

#[tokio::test(start_paused = true)]
async fn leaving_a_view_resets_its_local_state() {
    let shell = desktop();
    shell.select_view(ViewId::Catalog);
    shell
        .apply(ViewAction::SetCatalogFilter {
            filter: CatalogFilter::search("react"),
        })
        .unwrap();
    assert_eq!(catalog_filter(&shell).search_text, "react");

    shell.select_view(ViewId::Admin);
    shell.select_view(ViewId::Catalog);
    assert_eq!(shell.current_view(), ViewId::Catalog);
    assert_eq!(catalog_filter(&shell), CatalogFilter::default());
}

#[tokio::test(start_paused = true)]
async fn reselecting_the_active_view_keeps_its_gate() {
    let shell = desktop();
    shell.select_view(ViewId::Catalog);
    shell
        .apply(ViewAction::SetCatalogTab {
            tab: CatalogTab::Featured,
        })
        .unwrap();
    sleep(Duration::from_millis(101)).await;

    let key = shell.gate_key();
    shell.select_view(ViewId::Catalog);
    assert_eq!(shell.gate_key(), key);
    assert!(shell.is_revealed());
    match shell.view_instance() {
        ViewInstance::Catalog(view) => assert_eq!(view.tab, CatalogTab::Featured),
        other => panic!("expected catalog, got {:?}", other.id()),
    }
}

#[tokio::test(start_paused = true)]
async fn unknown_identifier_falls_back_to_dashboard() {
    let shell = desktop();
    shell.select_view(ViewId::Investor);

    assert_eq!(shell.select_view_str("gradebook").unwrap(), ViewId::Dashboard);
    assert_eq!(shell.current_view(), ViewId::Dashboard);

    assert_eq!(shell.select_view_str("compliance").unwrap(), ViewId::Compliance);
    assert_eq!(shell.current_view(), ViewId::Compliance);
}

#[tokio::test(start_paused = true)]
async fn strict_policy_rejects_unknown_identifiers() {
    let shell = start_shell(
        1280,
        ShellConfig {
            unknown_view_policy: UnknownViewPolicy::Strict,
            ..ShellConfig::default()
        },
    );
    shell.select_view(ViewId::Investor);

    let err = shell.select_view_str("gradebook").unwrap_err();
    assert!(matches!(err, ShellError::UnknownView(ref raw) if raw == "gradebook"));
    assert_eq!(shell.current_view(), ViewId::Investor);
}

#[tokio::test(start_paused = true)]
async fn actions_for_another_view_are_rejected() {
    let shell = desktop();
    let before = shell.view_instance();

    let err = shell
        .apply(ViewAction::SetCatalogTab {
            tab: CatalogTab::New,
        })
        .unwrap_err();
    match err {
        ShellError::ActionMismatch {
            action,
            expected,
            active,
        } => {
            assert_eq!(action, "set_catalog_tab");
            assert_eq!(expected, ViewId::Catalog);
            assert_eq!(active, ViewId::Dashboard);
        }
        other => panic!("unexpected error {other}"),
    }
    assert_eq!(shell.view_instance(), before);
}

#[tokio::test(start_paused = true)]
async fn refresh_tick_remounts_the_active_view() {
    let shell = desktop();
    shell.select_view(ViewId::Catalog);
    shell
        .apply(ViewAction::SetCatalogFilter {
            filter: CatalogFilter::default().with_category("design"),
        })
        .unwrap();

    sleep(Duration::from_millis(299_990)).await;
    assert!(shell.is_revealed());
    assert_eq!(shell.gate_key().refreshed_at, 0);

    sleep(Duration::from_millis(11)).await;
    assert_eq!(shell.last_refresh(), 300_000);
    assert_eq!(shell.gate_key().refreshed_at, 300_000);
    assert_eq!(shell.current_view(), ViewId::Catalog);
    assert!(!shell.is_revealed());
    assert_eq!(catalog_filter(&shell), CatalogFilter::default());

    let frame = shell.frame();
    assert!(frame.refresh.just_refreshed);
    assert_eq!(frame.refresh.label, "Refreshed");

    sleep(Duration::from_millis(100)).await;
    assert!(shell.is_revealed());
}

#[tokio::test(start_paused = true)]
async fn compact_viewport_uses_icon_navigation_and_longer_delay() {
    let shell = start_shell(500, ShellConfig::default());
    assert!(shell.is_compact());

    let frame = shell.frame();
    assert!(frame.compact);
    assert!(frame.navigation.iter().all(|group| group.label.is_none()));
    assert!(frame
        .navigation
        .iter()
        .flat_map(|group| group.items.iter())
        .all(|item| item.label.is_none() && item.hover_title.is_some()));

    sleep(Duration::from_millis(150)).await;
    assert!(!shell.is_revealed());
    sleep(Duration::from_millis(51)).await;
    assert!(shell.is_revealed());
}

#[tokio::test(start_paused = true)]
async fn viewport_changes_reach_the_frame() {
    let shell = desktop();
    shell.viewport().resize(600);
    sleep(Duration::from_millis(1)).await;
    assert!(shell.frame().compact);

    // Gates created after the switch use the compact delay.
    shell.select_view(ViewId::Investor);
    sleep(Duration::from_millis(150)).await;
    assert!(!shell.is_revealed());
    sleep(Duration::from_millis(51)).await;
    assert!(shell.is_revealed());
}

#[tokio::test(start_paused = true)]
async fn platform_meta_is_installed_once() {
    let shell = desktop();
    let head = shell.head();
    assert_eq!(head.len(), 6);
    assert_eq!(
        head.get("viewport"),
        Some("width=device-width, initial-scale=1.0, maximum-scale=5.0, minimum-scale=0.5, user-scalable=yes, viewport-fit=cover")
    );
    assert_eq!(head.get("format-detection"), Some("telephone=no"));
}

#[tokio::test(start_paused = true)]
async fn shutdown_releases_the_viewport() {
    let viewport = Viewport::new(1280);
    let shell = Shell::start(
        ShellConfig::default(),
        Arc::new(Fixtures::embedded().unwrap()),
        viewport.clone(),
        Arc::new(MonotonicClock::starting_at(0)),
    )
    .unwrap();
    assert_eq!(viewport.listener_count(), 2);

    shell.shutdown().await;
    assert_eq!(viewport.listener_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn zero_refresh_interval_is_refused_at_start() {
    let viewport = Viewport::new(1280);
    let result = Shell::start(
        ShellConfig {
            refresh_interval: Duration::ZERO,
            ..ShellConfig::default()
        },
        Arc::new(Fixtures::embedded().unwrap()),
        viewport.clone(),
        Arc::new(MonotonicClock::starting_at(0)),
    );
    assert!(matches!(result, Err(ShellError::Schedule(_))));
    assert_eq!(viewport.listener_count(), 0);
}
