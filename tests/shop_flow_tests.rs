//! Service-level flows over the seeded shop store

use crm::core::service::ShopService;
use crm::model::{Customer, Order};
use crm::storage::InMemoryShopService;

#[tokio::test]
async fn seeded_customer_order_scenario() {
    let shop = InMemoryShopService::with_demo_data();

    // Seeded: customer 123 "Jelena Katusic" with order 223
    let customer = shop.get_customer(123).await.unwrap();
    assert_eq!(customer.name, "Jelena Katusic");

    // addOrder to customer 123 assigns id 224
    let added = shop
        .add_order(123, Order::new("order 224"))
        .await
        .unwrap();
    assert_eq!(added.id, 224);

    // getOrders returns both 223 and 224, in insertion order
    let orders = shop.list_orders(123).await.unwrap();
    let ids: Vec<u64> = orders.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![223, 224]);

    // deleteOrder(123, 223) leaves only 224
    shop.delete_order(123, 223).await.unwrap();
    let remaining = shop.list_orders(123).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, 224);
}

#[tokio::test]
async fn order_total_round_trips_over_add_and_delete() {
    let shop = InMemoryShopService::with_demo_data();

    let before = shop.get_order(123, 223).await.unwrap().total;

    shop.add_order_product(123, 223, 323).await.unwrap();
    assert_eq!(shop.get_order(123, 223).await.unwrap().total, before + 1000);

    shop.delete_order_product(123, 223, 323).await.unwrap();
    assert_eq!(shop.get_order(123, 223).await.unwrap().total, before);
}

#[tokio::test]
async fn repeated_add_increments_flat_and_delete_removes_entirely() {
    let shop = InMemoryShopService::with_demo_data();

    // Three adds of the same catalog product: one unit price per call
    shop.add_order_product(123, 223, 323).await.unwrap();
    shop.add_order_product(123, 223, 323).await.unwrap();
    shop.add_order_product(123, 223, 323).await.unwrap();

    let order = shop.get_order(123, 223).await.unwrap();
    assert_eq!(order.total, 3000);
    let products = shop.list_order_products(123, 223).await.unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].quantity_ordered, 3);

    // Delete removes the whole line, subtracting price * quantity
    shop.delete_order_product(123, 223, 323).await.unwrap();
    let order = shop.get_order(123, 223).await.unwrap();
    assert_eq!(order.total, 0);
    assert!(shop
        .list_order_products(123, 223)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn customer_ids_are_server_assigned_and_sequential() {
    let shop = InMemoryShopService::with_demo_data();

    let mut submitted = Customer::new("National Aquarium");
    submitted.id = 9999; // client-supplied id is ignored
    let first = shop.add_customer(submitted).await.unwrap();
    let second = shop.add_customer(Customer::new("Second")).await.unwrap();

    assert_eq!(first.id, 124);
    assert_eq!(second.id, 125);
}

#[tokio::test]
async fn deleting_customer_does_not_cascade() {
    let shop = InMemoryShopService::with_demo_data();

    shop.delete_customer(123).await.unwrap();

    // The customer and its orders are unreachable, but the catalog is
    // untouched: deletion is local to one registry.
    assert!(shop.get_customer(123).await.is_err());
    assert!(shop.list_orders(123).await.is_err());
    assert!(shop.get_product(323).await.is_ok());
}

#[tokio::test]
async fn order_operations_on_missing_customer_are_not_found() {
    let shop = InMemoryShopService::new();

    assert!(shop.list_orders(1).await.is_err());
    assert!(shop.add_order(1, Order::new("orphan")).await.is_err());
    assert!(shop.delete_order(1, 223).await.is_err());
}
