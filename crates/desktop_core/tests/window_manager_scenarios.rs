use std::collections::BTreeSet;

use desktop_core::{
    reduce_desktop, DesktopAction, DesktopState, Point, PointerBounds, PointerSessionManager,
    Rect, ShellCatalog, WindowId, WindowLifecycle,
};
use pretty_assertions::assert_eq;

const BOUNDS: PointerBounds = PointerBounds {
    viewport: Rect::new(0, 0, 1280, 800),
    surface: Rect::new(0, 0, 1280, 762),
};

struct Desktop {
    state: DesktopState,
    pointer: PointerSessionManager,
}

impl Desktop {
    fn boot() -> Self {
        let catalog = ShellCatalog::builtin().expect("builtin catalog");
        let mut desktop = Self {
            state: catalog.initial_state(),
            pointer: PointerSessionManager::default(),
        };
        if let Some(window_id) = catalog.boot_window {
            desktop.dispatch(DesktopAction::OpenWindow { window_id });
        }
        desktop
    }

    fn dispatch(&mut self, action: DesktopAction) {
        reduce_desktop(&mut self.state, &mut self.pointer, action).expect("action applies");
    }

    fn active(&self) -> Option<&str> {
        self.state.active_window_id().map(WindowId::as_str)
    }

    fn button_ids(&self) -> BTreeSet<String> {
        self.state
            .taskbar
            .window_ids()
            .map(|id| id.to_string())
            .collect()
    }

    fn highlighted_buttons(&self) -> usize {
        self.state
            .taskbar
            .buttons()
            .iter()
            .filter(|b| !b.inactive)
            .count()
    }
}

fn id(raw: &str) -> WindowId {
    WindowId::new(raw)
}

#[test]
fn profile_window_taskbar_round_trip() {
    let mut desktop = Desktop::boot();

    assert_eq!(desktop.active(), Some("profile-window"));
    let buttons = desktop.state.taskbar.buttons();
    assert_eq!(buttons.len(), 1);
    assert_eq!(buttons[0].label, "Profile");
    assert!(!buttons[0].inactive);
    let geometry = desktop.state.window(&id("profile-window")).unwrap().rect;

    desktop.dispatch(DesktopAction::ToggleTaskbarWindow {
        window_id: id("profile-window"),
    });
    assert_eq!(desktop.active(), None);
    assert!(desktop.state.taskbar.buttons()[0].inactive);
    assert_eq!(
        desktop.state.window(&id("profile-window")).unwrap().lifecycle,
        WindowLifecycle::Minimized
    );

    desktop.dispatch(DesktopAction::ToggleTaskbarWindow {
        window_id: id("profile-window"),
    });
    assert_eq!(desktop.active(), Some("profile-window"));
    assert!(!desktop.state.taskbar.buttons()[0].inactive);
    assert_eq!(desktop.state.window(&id("profile-window")).unwrap().rect, geometry);
}

#[test]
fn at_most_one_active_window_and_it_is_the_latest_activated() {
    let mut desktop = Desktop::boot();
    let script = [
        DesktopAction::OpenWindow { window_id: id("projects-window") },
        DesktopAction::OpenWindow { window_id: id("contact-window") },
        DesktopAction::FocusWindow { window_id: id("profile-window") },
        DesktopAction::MinimizeWindow { window_id: id("profile-window") },
        DesktopAction::FocusWindow { window_id: id("projects-window") },
        DesktopAction::FocusWindow { window_id: id("profile-window") },
        DesktopAction::CloseWindow { window_id: id("projects-window") },
        DesktopAction::OpenWindow { window_id: id("weather-window") },
        DesktopAction::ToggleTaskbarWindow { window_id: id("profile-window") },
        DesktopAction::FocusWindow { window_id: id("contact-window") },
    ];
    let mut last_activated: Option<&str> = Some("profile-window");

    for action in script {
        let target = match &action {
            DesktopAction::OpenWindow { window_id }
            | DesktopAction::FocusWindow { window_id }
            | DesktopAction::ToggleTaskbarWindow { window_id } => Some(window_id.clone()),
            _ => None,
        };
        desktop.dispatch(action);

        if let Some(target) = target {
            if desktop.state.window(&target).unwrap().is_visible() {
                last_activated = Some(match target.as_str() {
                    "profile-window" => "profile-window",
                    "projects-window" => "projects-window",
                    "contact-window" => "contact-window",
                    _ => "weather-window",
                });
            }
        }

        assert!(desktop.highlighted_buttons() <= 1);
        let active = desktop.active();
        if let Some(active) = active {
            assert_eq!(Some(active), last_activated);
            let top = desktop.state.registry.visible_by_z_order().last().map(|w| w.id.as_str());
            assert_eq!(top, Some(active));
        }
    }

    assert_eq!(desktop.active(), Some("contact-window"));
}

#[test]
fn taskbar_mirrors_opened_and_not_closed_windows() {
    let mut desktop = Desktop::boot();
    let mut expected: BTreeSet<String> = ["profile-window".to_string()].into();

    let script = [
        ("open", "projects-window"),
        ("minimize", "projects-window"),
        ("open", "contact-window"),
        ("close", "profile-window"),
        ("minimize", "contact-window"),
        ("close", "contact-window"),
        ("open", "weather-window"),
        ("open", "profile-window"),
        ("close", "weather-window"),
        ("minimize", "weather-window"),
    ];

    for (verb, window) in script {
        let window_id = id(window);
        let action = match verb {
            "open" => {
                expected.insert(window.to_string());
                DesktopAction::OpenWindow { window_id }
            }
            "minimize" => DesktopAction::MinimizeWindow { window_id },
            _ => {
                expected.remove(window);
                DesktopAction::CloseWindow { window_id }
            }
        };
        desktop.dispatch(action);
        assert_eq!(desktop.button_ids(), expected);
    }
}

#[test]
fn z_order_is_monotonic_across_reactivation() {
    let mut desktop = Desktop::boot();
    let z = |desktop: &Desktop, raw: &str| desktop.state.window(&id(raw)).unwrap().z_index;

    desktop.dispatch(DesktopAction::OpenWindow { window_id: id("projects-window") });
    desktop.dispatch(DesktopAction::FocusWindow { window_id: id("profile-window") });
    let a_first = z(&desktop, "profile-window");
    desktop.dispatch(DesktopAction::FocusWindow { window_id: id("projects-window") });
    let b = z(&desktop, "projects-window");
    desktop.dispatch(DesktopAction::FocusWindow { window_id: id("profile-window") });
    let a_second = z(&desktop, "profile-window");

    assert!(a_second > b);
    assert!(b > a_first);
}

#[test]
fn titlebar_drag_moves_window_by_grab_offset() {
    let mut desktop = Desktop::boot();
    let window_id = id("contact-window");
    desktop.dispatch(DesktopAction::OpenWindow { window_id: window_id.clone() });
    let rect = desktop.state.window(&window_id).unwrap().rect;

    desktop.dispatch(DesktopAction::BeginWindowDrag {
        window_id: window_id.clone(),
        pointer: Point::new(rect.x + 20, rect.y + 10),
    });
    desktop.dispatch(DesktopAction::PointerMove {
        pointer: Point::new(500, 400),
        bounds: BOUNDS,
    });
    desktop.dispatch(DesktopAction::PointerUp);

    let moved = desktop.state.window(&window_id).unwrap().rect;
    assert_eq!((moved.x, moved.y), (480, 390));
    assert_eq!((moved.w, moved.h), (rect.w, rect.h));
    assert!(!desktop.pointer.is_active());
}

#[test]
fn drag_then_resize_from_different_windows_do_not_interfere() {
    let mut desktop = Desktop::boot();
    let profile = id("profile-window");
    let projects = id("projects-window");
    desktop.dispatch(DesktopAction::OpenWindow { window_id: projects.clone() });
    let profile_before = desktop.state.window(&profile).unwrap().rect;
    let projects_before = desktop.state.window(&projects).unwrap().rect;

    desktop.dispatch(DesktopAction::BeginWindowDrag {
        window_id: profile.clone(),
        pointer: Point::new(profile_before.x, profile_before.y),
    });
    desktop.dispatch(DesktopAction::PointerMove {
        pointer: Point::new(profile_before.x + 30, profile_before.y + 40),
        bounds: BOUNDS,
    });
    desktop.dispatch(DesktopAction::PointerUp);

    desktop.dispatch(DesktopAction::BeginWindowResize {
        window_id: projects.clone(),
        pointer: Point::new(600, 600),
    });
    desktop.dispatch(DesktopAction::PointerMove {
        pointer: Point::new(650, 610),
        bounds: BOUNDS,
    });
    desktop.dispatch(DesktopAction::PointerUp);

    assert_eq!(
        desktop.state.window(&profile).unwrap().rect,
        profile_before.with_top_left(Point::new(profile_before.x + 30, profile_before.y + 40))
    );
    assert_eq!(
        desktop.state.window(&projects).unwrap().rect,
        Rect {
            w: projects_before.w + 50,
            h: projects_before.h + 10,
            ..projects_before
        }
    );
    assert_eq!(desktop.active(), Some("projects-window"));
}
