use jiff::Timestamp;

use crate::domain::{
    carts::models::{Cart, CartItem},
    orders::{models::Order, status::OrderStatus},
    products::models::Product,
};

pub(crate) fn product(id: u64, price: u64) -> Product {
    Product {
        id,
        name: format!("Product {id}"),
        slug: format!("product-{id}"),
        description: String::new(),
        price,
        original_price: price,
        image: String::new(),
        images: Vec::new(),
        category_id: 1,
        stock: 10,
        is_new: false,
        is_hot: false,
        is_sale: false,
        discount: 0.0,
        rating: 4.5,
        review_count: 3,
        status: "active".to_string(),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn cart_item(product_id: u64, price: u64, quantity: u32) -> CartItem {
    CartItem {
        product_id,
        product: Some(product(product_id, price)),
        quantity,
    }
}

pub(crate) fn cart(id: u64, user_id: u64, items: Vec<CartItem>) -> Cart {
    let total_price = items
        .iter()
        .filter_map(|item| {
            item.product
                .as_ref()
                .map(|p| p.price * u64::from(item.quantity))
        })
        .sum();

    Cart {
        id,
        user_id,
        items,
        total_price,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn order(id: u64, user_id: u64, status: OrderStatus) -> Order {
    Order {
        id,
        user_id,
        address_id: 1,
        status,
        store: "Kho Hà Nội".to_string(),
        total_price: 245_000,
        subtotal: 250_000,
        total_item: 3,
        shipping_fee: 20_000,
        discount: 0.1,
        payment_method: "cod".to_string(),
        order_date: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}
