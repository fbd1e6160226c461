use std::fs;
use std::io::Cursor;

use ordertrack_cli::Shell;
use ordertrack_infra::{JsonFileStore, OrderManager, StoreConfig};
use tempfile::{TempDir, tempdir};

fn file_manager() -> (TempDir, StoreConfig, OrderManager<JsonFileStore, JsonFileStore>) {
    let dir = tempdir().unwrap();
    let config = StoreConfig {
        pending_path: dir.path().join("orders.json"),
        fulfilled_path: dir.path().join("output_orders.json"),
    };
    let manager = OrderManager::from_config(&config);
    (dir, config, manager)
}

fn run_script(manager: &OrderManager<JsonFileStore, JsonFileStore>, script: &str) -> String {
    let mut shell = Shell::new(manager, Cursor::new(script.to_string()), Vec::new());
    shell.run().unwrap();
    String::from_utf8(shell.into_output()).unwrap()
}

#[test]
fn create_report_and_fulfill_round_trip() {
    let (_dir, config, manager) = file_manager();

    let script = "1\na1\nMary\nTea\n50\n2\n\n2\n3\n1\n4\n";
    let out = run_script(&manager, script);

    assert!(out.contains("=> Order A1 added!"));
    assert!(out.contains("Tea\t50\t2\t100"));
    assert!(out.contains("Order Total: 100"));
    assert!(out.contains("1. Order ID: A1 - Customer: Mary"));
    assert!(out.contains("=> Order A1 fulfilled:"));
    assert!(out.contains("  - Tea x 2 @ 50 = 100"));

    assert!(manager.list_pending().is_empty());
    let fulfilled = manager.list_fulfilled();
    assert_eq!(fulfilled.len(), 1);
    assert_eq!(fulfilled[0].order_id.as_str(), "A1");
    assert_eq!(fs::read_to_string(&config.pending_path).unwrap(), "[]");
}

#[test]
fn duplicate_id_is_rejected_before_asking_for_customer() {
    let (_dir, _config, manager) = file_manager();

    let script = "1\nA1\nMary\nTea\n50\n2\n\n1\na1\n4\n";
    let out = run_script(&manager, script);

    assert!(out.contains("=> Error: order ID A1 already exists"));
    assert_eq!(out.matches("Customer name: ").count(), 1);
    assert_eq!(manager.list_pending().len(), 1);
}

#[test]
fn invalid_price_and_quantity_reprompt_only_that_field() {
    let (_dir, _config, manager) = file_manager();

    let script = "1\nB2\nAnn\nCake\nabc\n-5\n120\n0\n3\n\n4\n";
    let out = run_script(&manager, script);

    assert_eq!(out.matches("Item name (blank to finish): ").count(), 2);
    assert_eq!(out.matches("Price: ").count(), 3);
    assert_eq!(out.matches("Quantity: ").count(), 2);
    assert!(out.contains("expected a whole number"));
    assert!(out.contains("price cannot be negative"));
    assert!(out.contains("quantity must be a positive integer"));

    let pending = manager.list_pending();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].items[0].price, 120);
    assert_eq!(pending[0].items[0].quantity, 3);
}

#[test]
fn order_without_items_is_not_saved() {
    let (_dir, config, manager) = file_manager();

    let out = run_script(&manager, "1\nC3\nCid\n\n4\n");

    assert!(out.contains("=> Error: an order needs at least one item"));
    assert!(!config.pending_path.exists());
}

#[test]
fn fulfillment_prompt_handles_cancel_and_bad_selection() {
    let (_dir, config, manager) = file_manager();
    run_script(&manager, "1\nA1\nMary\nTea\n50\n2\n\n4\n");
    let before = fs::read_to_string(&config.pending_path).unwrap();

    let out = run_script(&manager, "3\n\n3\nx\n3\n9\n4\n");

    assert!(out.contains("=> Error: invalid selection"));
    assert_eq!(out.matches("=> Error: invalid selection").count(), 2);
    assert!(!out.contains("fulfilled:"));
    assert_eq!(fs::read_to_string(&config.pending_path).unwrap(), before);
    assert!(!config.fulfilled_path.exists());
}

#[test]
fn empty_lists_show_distinct_messages() {
    let (_dir, _config, manager) = file_manager();

    let out = run_script(&manager, "2\n3\n\n");

    assert!(out.contains("=> No orders yet"));
    assert!(out.contains("=> No orders to fulfill"));
}

#[test]
fn unknown_choice_hints_and_end_of_input_exits() {
    let (_dir, _config, manager) = file_manager();

    let out = run_script(&manager, "9\n");

    assert!(out.contains("=> Please enter a valid option (1-4)"));
    assert_eq!(out.matches("Select an option").count(), 2);
}

#[test]
fn end_of_input_mid_order_abandons_it() {
    let (_dir, config, manager) = file_manager();

    run_script(&manager, "1\nA1\nMary\nTea\n50\n");

    assert!(!config.pending_path.exists());
}

#[test]
fn corrupt_pending_file_is_treated_as_empty() {
    let (_dir, config, manager) = file_manager();
    fs::write(&config.pending_path, "not json at all").unwrap();

    let out = run_script(&manager, "2\n1\nA1\nMary\nTea\n50\n2\n\n4\n");

    assert!(out.contains("=> No orders yet"));
    assert!(out.contains("=> Order A1 added!"));
    assert_eq!(manager.list_pending().len(), 1);
}
