//! Namespaced dispatch through the global event set.

use std::sync::Arc;

use parking_lot::Mutex;
use trestle_core::{
    global_event_name, global_event_set, EventArgs, EventError, EventSet, Subscriber,
};

// Tests in this file share the global set; one of them mutes it.
static GLOBAL_LOCK: Mutex<()> = parking_lot::const_mutex(());

fn setup() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("trestle_core=trace")
        .with_test_writer()
        .try_init();
}

type Log = Arc<Mutex<Vec<String>>>;

fn record(
    log: &Log,
    tag: &'static str,
) -> impl Fn(&mut EventArgs) -> bool + Send + Sync + 'static {
    let log = log.clone();
    move |args: &mut EventArgs| {
        log.lock().push(format!("{tag}:{}/{}", args.namespace(), args.name()));
        false
    }
}

#[test]
fn global_subscriber_sees_namespaced_fire_first() {
    setup();
    let _guard = GLOBAL_LOCK.lock();
    let log: Log = Arc::default();

    let global_conn = global_event_set()
        .subscribe_event(&global_event_name("Window", "Clicked"), record(&log, "global"));
    let first = EventSet::with_owner("OkButton");
    let second = EventSet::with_owner("CancelButton");
    first.subscribe_event("Clicked", record(&log, "ok"));
    second.subscribe_event("Clicked", record(&log, "cancel"));

    first
        .fire_event_in_namespace("Clicked", &mut EventArgs::new(), "Window")
        .unwrap();
    second
        .fire_event_in_namespace("Clicked", &mut EventArgs::new(), "Window")
        .unwrap();

    assert_eq!(
        *log.lock(),
        vec![
            "global:Window/Clicked",
            "ok:Window/Clicked",
            "global:Window/Clicked",
            "cancel:Window/Clicked",
        ]
    );
    global_conn.disconnect();
}

#[test]
fn other_namespaces_do_not_reach_global_subscriber() {
    setup();
    let _guard = GLOBAL_LOCK.lock();
    let log: Log = Arc::default();

    let global_conn =
        global_event_set().subscribe_event("Scrollbar/ThumbMoved", record(&log, "global"));
    let set = EventSet::new();

    set.fire_event_in_namespace("ThumbMoved", &mut EventArgs::new(), "Slider")
        .unwrap();
    set.fire_event("ThumbMoved", &mut EventArgs::new()).unwrap();
    assert!(log.lock().is_empty());
    global_conn.disconnect();
}

#[test]
fn global_mute_only_silences_global_dispatch() {
    setup();
    let _guard = GLOBAL_LOCK.lock();
    let log: Log = Arc::default();

    let global_conn =
        global_event_set().subscribe_event("Editbox/TextChanged", record(&log, "global"));
    let set = EventSet::with_owner("NameField");
    set.subscribe_event("TextChanged", record(&log, "local"));

    global_event_set().set_muted(true);
    set.fire_event_in_namespace("TextChanged", &mut EventArgs::new(), "Editbox")
        .unwrap();
    global_event_set().set_muted(false);

    // A muted local set suppresses the global offer too.
    set.set_muted(true);
    set.fire_event_in_namespace("TextChanged", &mut EventArgs::new(), "Editbox")
        .unwrap();

    assert_eq!(*log.lock(), vec!["local:Editbox/TextChanged"]);
    global_conn.disconnect();
}

#[test]
fn global_handled_flag_and_failure_carry_over() {
    setup();
    let _guard = GLOBAL_LOCK.lock();
    let log: Log = Arc::default();

    let handled_conn = global_event_set().subscribe_event("Frame/Shown", |_| true);
    let failing_conn = global_event_set().subscribe(
        "Frame/Closed",
        0,
        Subscriber::fallible(|_| Err("veto".into())),
    );
    let set = EventSet::with_owner("MainFrame");
    set.subscribe_event("Shown", record(&log, "local"));
    set.subscribe_event("Closed", record(&log, "local"));

    let mut args = EventArgs::new();
    set.fire_event_in_namespace("Shown", &mut args, "Frame").unwrap();
    assert!(args.is_handled());

    let err = set
        .fire_event_in_namespace("Closed", &mut EventArgs::new(), "Frame")
        .unwrap_err();
    assert!(matches!(err, EventError::Handler { ref event, .. } if event == "Frame/Closed"));
    assert_eq!(*log.lock(), vec!["local:Frame/Shown"]);

    handled_conn.disconnect();
    failing_conn.disconnect();
}
