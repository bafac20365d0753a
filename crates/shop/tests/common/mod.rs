#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use chrono::{Duration, NaiveDate, Utc};
use http_body_util::BodyExt;
use serde_json::Value;
use shared::{
    abstract_trait::{JwtServiceTrait, KafkaTrait},
    config::{Hashing, JwtConfig},
    domain::EmailRequest,
    errors::{RepositoryError, ServiceError},
};
use shop::{
    abstract_trait::{
        cache::CatalogCacheTrait,
        cart::repository::{CartCommandRepositoryTrait, CartQueryRepositoryTrait},
        catalog::CatalogQueryRepositoryTrait,
        comment::repository::{CommentCommandRepositoryTrait, CommentQueryRepositoryTrait},
        discount::DiscountQueryRepositoryTrait,
        order::repository::{OrderCommandRepositoryTrait, OrderQueryRepositoryTrait},
        payment::PaymentGatewayTrait,
        user::repository::{UserCommandRepositoryTrait, UserQueryRepositoryTrait},
        variant::VariantQueryRepositoryTrait,
    },
    di::DependenciesInjectDeps,
    domain::{
        requests::{
            comment::{CreateCommentRecordRequest, UpdateCommentRecordRequest},
            order::CreateOrderRecordRequest,
            user::{CreateUserRecordRequest, UpdateUserRecordRequest},
        },
        response::{catalog::ProductResponse, payment::PaymentResult},
    },
    handler::AppRouter,
    model::{
        cart::{Cart, CartItem, CartLine},
        comment::Comment,
        discount::Discount,
        order::{Order, OrderDetail, PlacedOrder},
        product::{Product, ProductImage},
        user::User,
        variant::Variant,
    },
    state::AppState,
};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};
use tower::ServiceExt;

pub const JWT_SECRET: &str = "test-secret";
pub const ORDERS_LINK: &str = "http://shop.test/order/my-orders/";
pub const SHOP_URL: &str = "http://shop.test";

#[derive(Default)]
struct Store {
    next_id: i32,
    users: Vec<User>,
    passwords: HashMap<i32, String>,
    products: Vec<Product>,
    images: Vec<ProductImage>,
    variants: HashMap<i32, Variant>,
    discounts: Vec<Discount>,
    orders: Vec<Order>,
    details: Vec<OrderDetail>,
    carts: Vec<Cart>,
    cart_items: Vec<CartItem>,
    comments: Vec<Comment>,
    stale_stock: HashMap<i32, i32>,
    fail_status_update: bool,
}

impl Store {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        1000 + self.next_id
    }
}

/// In-memory stand-in for every postgres repository.
#[derive(Clone, Default)]
pub struct MemoryDb {
    inner: Arc<Mutex<Store>>,
}

impl MemoryDb {
    fn with<R>(&self, f: impl FnOnce(&mut Store) -> R) -> R {
        let mut store = self.inner.lock().unwrap();
        f(&mut store)
    }

    pub fn add_user(&self, user_id: i32, username: &str, email: &str, phone: Option<&str>) {
        self.with(|s| {
            s.users.push(User {
                user_id,
                username: username.to_string(),
                email: email.to_string(),
                phone_number: phone.map(str::to_string),
                address: None,
                date_of_birth: None,
                created_at: None,
                updated_at: None,
            })
        });
    }

    pub fn add_product(&self, product_id: i32, name: &str, brand: Option<(i32, &str)>) {
        self.with(|s| {
            s.products.push(Product {
                product_id,
                name: name.to_string(),
                description: Some(format!("{name} description")),
                technical_specifications: Some(serde_json::json!({"screen": "6.1 inch"})),
                brand_id: brand.map(|(id, _)| id),
                brand_name: brand.map(|(_, name)| name.to_string()),
                brand_img: None,
                created_at: None,
                updated_at: None,
            })
        });
    }

    pub fn add_image(&self, image_id: i32, product_id: i32, img: &str) {
        self.with(|s| {
            s.images.push(ProductImage {
                image_id,
                product_id,
                img: img.to_string(),
            })
        });
    }

    pub fn add_variant(
        &self,
        variant_id: i32,
        product_id: i32,
        quantity: i32,
        price: f64,
        compare_at_price: Option<f64>,
    ) {
        self.with(|s| {
            let product_name = s
                .products
                .iter()
                .find(|p| p.product_id == product_id)
                .map(|p| p.name.clone())
                .unwrap_or_default();

            s.variants.insert(
                variant_id,
                Variant {
                    variant_id,
                    product_id,
                    product_name,
                    sku: format!("SKU-{variant_id}"),
                    memory: Some("128GB".into()),
                    color: Some("Black".into()),
                    quantity,
                    price,
                    compare_at_price,
                    img: None,
                    created_at: None,
                    updated_at: None,
                },
            );
        });
    }

    pub fn add_discount(
        &self,
        discount_id: i32,
        code: &str,
        percent: Option<f64>,
        money: Option<f64>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) {
        self.with(|s| {
            s.discounts.push(Discount {
                discount_id,
                code: code.to_string(),
                discount_percent: percent,
                discount_money: money,
                start_date,
                end_date,
                created_at: None,
                updated_at: None,
            })
        });
    }

    pub fn add_comment(&self, user_id: i32, variant_id: i32, comment: &str, star: i32) -> i32 {
        self.with(|s| {
            let comment_id = s.next_id();
            let username = s
                .users
                .iter()
                .find(|u| u.user_id == user_id)
                .map(|u| u.username.clone())
                .unwrap_or_default();
            s.comments.push(Comment {
                comment_id,
                user_id,
                username,
                variant_id,
                comment: comment.to_string(),
                star,
                created_at: Some(Utc::now().naive_utc()),
                updated_at: None,
            });
            comment_id
        })
    }

    pub fn fail_status_updates(&self) {
        self.with(|s| s.fail_status_update = true);
    }

    /// Variant reads report `quantity` while the stored stock is left alone.
    pub fn report_stale_stock(&self, variant_id: i32, quantity: i32) {
        self.with(|s| {
            s.stale_stock.insert(variant_id, quantity);
        });
    }

    pub fn stock_of(&self, variant_id: i32) -> i32 {
        self.with(|s| s.variants.get(&variant_id).map(|v| v.quantity).unwrap_or(-1))
    }

    pub fn order_count(&self) -> usize {
        self.with(|s| s.orders.len())
    }

    pub fn details(&self) -> Vec<OrderDetail> {
        self.with(|s| s.details.clone())
    }

    pub fn comment(&self, id: i32) -> Option<Comment> {
        self.with(|s| s.comments.iter().find(|c| c.comment_id == id).cloned())
    }

    pub fn user(&self, id: i32) -> Option<User> {
        self.with(|s| s.users.iter().find(|u| u.user_id == id).cloned())
    }

    pub fn password_of(&self, id: i32) -> Option<String> {
        self.with(|s| s.passwords.get(&id).cloned())
    }
}

#[async_trait]
impl UserQueryRepositoryTrait for MemoryDb {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError> {
        Ok(self.with(|s| s.users.iter().find(|u| u.user_id == id).cloned()))
    }
}

/// Mirrors the unique constraints on `users.username` and `users.phone_number`.
fn user_clash(
    s: &Store,
    user_id: i32,
    username: &str,
    phone: Option<&str>,
) -> Option<RepositoryError> {
    let others = || s.users.iter().filter(move |u| u.user_id != user_id);

    if others().any(|u| u.username == username) {
        return Some(RepositoryError::AlreadyExists(
            "A user with that username already exists.".into(),
        ));
    }
    if phone.is_some() && others().any(|u| u.phone_number.as_deref() == phone) {
        return Some(RepositoryError::AlreadyExists(
            "A user with that phone number already exists.".into(),
        ));
    }
    None
}

#[async_trait]
impl UserCommandRepositoryTrait for MemoryDb {
    async fn create_user(&self, req: &CreateUserRecordRequest) -> Result<User, RepositoryError> {
        self.with(|s| {
            if let Some(err) = user_clash(s, 0, &req.username, req.phone_number.as_deref()) {
                return Err(err);
            }

            let now = Utc::now().naive_utc();
            let user = User {
                user_id: s.next_id(),
                username: req.username.clone(),
                email: req.email.clone(),
                phone_number: req.phone_number.clone(),
                address: req.address.clone(),
                date_of_birth: req.date_of_birth,
                created_at: Some(now),
                updated_at: Some(now),
            };
            s.passwords.insert(user.user_id, req.password.clone());
            s.users.push(user.clone());
            Ok(user)
        })
    }

    async fn update_user(&self, req: &UpdateUserRecordRequest) -> Result<User, RepositoryError> {
        self.with(|s| {
            let current = s
                .users
                .iter()
                .find(|u| u.user_id == req.user_id)
                .cloned()
                .ok_or(RepositoryError::NotFound)?;

            let phone = req.phone_number.as_deref().or(current.phone_number.as_deref());
            if let Some(err) = user_clash(s, req.user_id, &current.username, phone) {
                return Err(err);
            }

            if let Some(password) = &req.password {
                s.passwords.insert(req.user_id, password.clone());
            }

            let user = s
                .users
                .iter_mut()
                .find(|u| u.user_id == req.user_id)
                .ok_or(RepositoryError::NotFound)?;
            if let Some(email) = &req.email {
                user.email = email.clone();
            }
            if let Some(phone) = &req.phone_number {
                user.phone_number = Some(phone.clone());
            }
            if let Some(address) = &req.address {
                user.address = Some(address.clone());
            }
            if let Some(date) = req.date_of_birth {
                user.date_of_birth = Some(date);
            }
            user.updated_at = Some(Utc::now().naive_utc());
            Ok(user.clone())
        })
    }
}

#[async_trait]
impl VariantQueryRepositoryTrait for MemoryDb {
    async fn find_by_id(&self, id: i32) -> Result<Option<Variant>, RepositoryError> {
        Ok(self.with(|s| {
            let mut variant = s.variants.get(&id).cloned()?;
            if let Some(quantity) = s.stale_stock.get(&id) {
                variant.quantity = *quantity;
            }
            Some(variant)
        }))
    }
}

#[async_trait]
impl DiscountQueryRepositoryTrait for MemoryDb {
    async fn find_active(
        &self,
        code: &str,
        today: NaiveDate,
    ) -> Result<Option<Discount>, RepositoryError> {
        Ok(self.with(|s| {
            s.discounts
                .iter()
                .find(|d| d.code == code && d.is_active_on(today))
                .cloned()
        }))
    }
}

#[async_trait]
impl CatalogQueryRepositoryTrait for MemoryDb {
    async fn find_products(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.with(|s| {
            let mut products = s.products.clone();
            products.sort_by_key(|p| p.product_id);
            products
        }))
    }

    async fn find_product_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        Ok(self.with(|s| s.products.iter().find(|p| p.product_id == id).cloned()))
    }

    async fn find_images_by_products(
        &self,
        product_ids: &[i32],
    ) -> Result<Vec<ProductImage>, RepositoryError> {
        Ok(self.with(|s| {
            s.images
                .iter()
                .filter(|i| product_ids.contains(&i.product_id))
                .cloned()
                .collect()
        }))
    }

    async fn find_variants_by_products(
        &self,
        product_ids: &[i32],
    ) -> Result<Vec<Variant>, RepositoryError> {
        Ok(self.with(|s| {
            let mut variants: Vec<Variant> = s
                .variants
                .values()
                .filter(|v| product_ids.contains(&v.product_id))
                .cloned()
                .collect();
            variants.sort_by_key(|v| v.variant_id);
            variants
        }))
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for MemoryDb {
    async fn place_order(
        &self,
        req: &CreateOrderRecordRequest,
    ) -> Result<Option<PlacedOrder>, RepositoryError> {
        self.with(|s| {
            let variant = s
                .variants
                .get_mut(&req.variant_id)
                .ok_or(RepositoryError::NotFound)?;

            // same guard as the conditional UPDATE
            if variant.quantity < req.quantity {
                return Ok(None);
            }
            variant.quantity -= req.quantity;
            let remaining_stock = variant.quantity;

            let now = Utc::now().naive_utc();
            let order = Order {
                order_id: s.next_id(),
                user_id: req.user_id,
                discount_id: req.discount_id,
                note: req.note.clone(),
                ship_address: req.ship_address.clone(),
                ship_date: req.ship_date,
                payment: req.payment.clone(),
                created_at: Some(now),
                updated_at: Some(now),
            };
            let detail = OrderDetail {
                order_detail_id: s.next_id(),
                order_id: order.order_id,
                variant_id: req.variant_id,
                quantity: req.quantity,
                price: req.price,
                status: "Pending".into(),
                created_at: Some(now),
                updated_at: Some(now),
            };

            s.orders.push(order.clone());
            s.details.push(detail.clone());

            Ok(Some(PlacedOrder {
                order,
                detail,
                remaining_stock,
            }))
        })
    }

    async fn update_detail_status(
        &self,
        order_detail_id: i32,
        status: &str,
    ) -> Result<OrderDetail, RepositoryError> {
        self.with(|s| {
            if s.fail_status_update {
                return Err(RepositoryError::Custom("connection reset".into()));
            }
            let detail = s
                .details
                .iter_mut()
                .find(|d| d.order_detail_id == order_detail_id)
                .ok_or(RepositoryError::NotFound)?;
            detail.status = status.to_string();
            Ok(detail.clone())
        })
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for MemoryDb {
    async fn find_by_user(&self, user_id: i32) -> Result<Vec<Order>, RepositoryError> {
        Ok(self.with(|s| {
            let mut orders: Vec<Order> = s
                .orders
                .iter()
                .filter(|o| o.user_id == user_id)
                .cloned()
                .collect();
            orders.sort_by(|a, b| b.order_id.cmp(&a.order_id));
            orders
        }))
    }

    async fn find_by_id_and_phone(
        &self,
        order_id: i32,
        phone_number: &str,
    ) -> Result<Option<Order>, RepositoryError> {
        Ok(self.with(|s| {
            s.orders
                .iter()
                .find(|o| {
                    o.order_id == order_id
                        && s.users.iter().any(|u| {
                            u.user_id == o.user_id
                                && u.phone_number.as_deref() == Some(phone_number)
                        })
                })
                .cloned()
        }))
    }

    async fn find_details_by_orders(
        &self,
        order_ids: &[i32],
    ) -> Result<Vec<OrderDetail>, RepositoryError> {
        Ok(self.with(|s| {
            s.details
                .iter()
                .filter(|d| order_ids.contains(&d.order_id))
                .cloned()
                .collect()
        }))
    }
}

#[async_trait]
impl CartCommandRepositoryTrait for MemoryDb {
    async fn get_or_create_cart(&self, user_id: i32) -> Result<Cart, RepositoryError> {
        Ok(self.with(|s| {
            if let Some(cart) = s.carts.iter().find(|c| c.user_id == user_id) {
                return cart.clone();
            }
            let cart = Cart {
                cart_id: s.next_id(),
                user_id,
                created_at: None,
                updated_at: None,
            };
            s.carts.push(cart.clone());
            cart
        }))
    }

    async fn add_item(
        &self,
        cart_id: i32,
        variant_id: i32,
        quantity: i32,
    ) -> Result<CartItem, RepositoryError> {
        Ok(self.with(|s| {
            if let Some(item) = s
                .cart_items
                .iter_mut()
                .find(|i| i.cart_id == cart_id && i.variant_id == variant_id)
            {
                item.quantity += quantity;
                return item.clone();
            }
            let item = CartItem {
                cart_item_id: s.next_id(),
                cart_id,
                variant_id,
                quantity,
                created_at: None,
                updated_at: None,
            };
            s.cart_items.push(item.clone());
            item
        }))
    }

    async fn remove_item(&self, cart_id: i32, cart_item_id: i32) -> Result<bool, RepositoryError> {
        Ok(self.with(|s| {
            let before = s.cart_items.len();
            s.cart_items
                .retain(|i| !(i.cart_id == cart_id && i.cart_item_id == cart_item_id));
            s.cart_items.len() != before
        }))
    }

    async fn set_item_quantity(
        &self,
        cart_id: i32,
        variant_id: i32,
        quantity: i32,
    ) -> Result<Option<CartItem>, RepositoryError> {
        Ok(self.with(|s| {
            s.cart_items
                .iter_mut()
                .find(|i| i.cart_id == cart_id && i.variant_id == variant_id)
                .map(|item| {
                    item.quantity = quantity;
                    item.clone()
                })
        }))
    }
}

#[async_trait]
impl CartQueryRepositoryTrait for MemoryDb {
    async fn find_by_user(&self, user_id: i32) -> Result<Option<Cart>, RepositoryError> {
        Ok(self.with(|s| s.carts.iter().find(|c| c.user_id == user_id).cloned()))
    }

    async fn find_lines(&self, cart_id: i32) -> Result<Vec<CartLine>, RepositoryError> {
        Ok(self.with(|s| {
            s.cart_items
                .iter()
                .filter(|i| i.cart_id == cart_id)
                .filter_map(|i| {
                    s.variants.get(&i.variant_id).map(|v| CartLine {
                        cart_item_id: i.cart_item_id,
                        variant_id: v.variant_id,
                        sku: v.sku.clone(),
                        product_name: v.product_name.clone(),
                        price: v.price,
                        compare_at_price: v.compare_at_price,
                        quantity: i.quantity,
                    })
                })
                .collect()
        }))
    }
}

#[async_trait]
impl CommentCommandRepositoryTrait for MemoryDb {
    async fn create_comment(
        &self,
        req: &CreateCommentRecordRequest,
    ) -> Result<Comment, RepositoryError> {
        let id = self.add_comment(req.user_id, req.variant_id, &req.comment, req.star);
        self.comment(id).ok_or(RepositoryError::NotFound)
    }

    async fn update_comment(
        &self,
        req: &UpdateCommentRecordRequest,
    ) -> Result<Comment, RepositoryError> {
        self.with(|s| {
            let comment = s
                .comments
                .iter_mut()
                .find(|c| c.comment_id == req.comment_id)
                .ok_or(RepositoryError::NotFound)?;
            comment.comment = req.comment.clone();
            comment.star = req.star;
            comment.updated_at = Some(Utc::now().naive_utc());
            Ok(comment.clone())
        })
    }

    async fn delete_comment(&self, id: i32) -> Result<(), RepositoryError> {
        self.with(|s| {
            let before = s.comments.len();
            s.comments.retain(|c| c.comment_id != id);
            if s.comments.len() == before {
                Err(RepositoryError::NotFound)
            } else {
                Ok(())
            }
        })
    }
}

#[async_trait]
impl CommentQueryRepositoryTrait for MemoryDb {
    async fn find_all(&self, variant_id: Option<i32>) -> Result<Vec<Comment>, RepositoryError> {
        Ok(self.with(|s| {
            let mut comments: Vec<Comment> = s
                .comments
                .iter()
                .filter(|c| variant_id.is_none_or(|id| c.variant_id == id))
                .cloned()
                .collect();
            comments.sort_by(|a, b| b.comment_id.cmp(&a.comment_id));
            comments
        }))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Comment>, RepositoryError> {
        Ok(self.comment(id))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentBehavior {
    Accept,
    Decline,
    Unreachable,
}

pub struct FakePayment {
    behavior: PaymentBehavior,
    amounts: Mutex<Vec<i64>>,
}

impl FakePayment {
    pub fn new(behavior: PaymentBehavior) -> Self {
        Self {
            behavior,
            amounts: Mutex::new(Vec::new()),
        }
    }

    pub fn amounts(&self) -> Vec<i64> {
        self.amounts.lock().unwrap().clone()
    }
}

#[async_trait]
impl PaymentGatewayTrait for FakePayment {
    async fn create_payment(&self, amount: i64) -> Result<PaymentResult, ServiceError> {
        self.amounts.lock().unwrap().push(amount);

        match self.behavior {
            PaymentBehavior::Accept => Ok(PaymentResult {
                result_code: Some(0),
                pay_url: Some("https://pay.test/abc".into()),
                message: Some("Successful.".into()),
                order_id: Some("momo-1".into()),
            }),
            PaymentBehavior::Decline => Ok(PaymentResult {
                result_code: Some(1006),
                pay_url: None,
                message: Some("Transaction denied by user.".into()),
                order_id: Some("momo-1".into()),
            }),
            PaymentBehavior::Unreachable => {
                Err(ServiceError::Payment("connection refused".into()))
            }
        }
    }
}

/// Records published messages, or fails every publish when `down`.
#[derive(Default)]
pub struct FakeKafka {
    down: bool,
    sent: Mutex<Vec<(String, String, Vec<u8>)>>,
}

impl FakeKafka {
    pub fn down() -> Self {
        Self {
            down: true,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<(String, String, Vec<u8>)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn emails(&self) -> Vec<EmailRequest> {
        self.sent()
            .iter()
            .map(|(_, _, payload)| serde_json::from_slice(payload).unwrap())
            .collect()
    }
}

#[async_trait]
impl KafkaTrait for FakeKafka {
    async fn publish(&self, topic: &str, key: &str, value: &[u8]) -> Result<(), ServiceError> {
        if self.down {
            return Err(ServiceError::Kafka("broker unavailable".into()));
        }
        self.sent
            .lock()
            .unwrap()
            .push((topic.to_string(), key.to_string(), value.to_vec()));
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryCache {
    products: Mutex<Option<Vec<ProductResponse>>>,
    product: Mutex<HashMap<i32, ProductResponse>>,
    invalidated: Mutex<Vec<i32>>,
}

impl MemoryCache {
    pub fn invalidated(&self) -> Vec<i32> {
        self.invalidated.lock().unwrap().clone()
    }

    pub fn has_product(&self, id: i32) -> bool {
        self.product.lock().unwrap().contains_key(&id)
    }
}

#[async_trait]
impl CatalogCacheTrait for MemoryCache {
    async fn get_products(&self) -> Option<Vec<ProductResponse>> {
        self.products.lock().unwrap().clone()
    }

    async fn set_products(&self, products: &[ProductResponse]) {
        *self.products.lock().unwrap() = Some(products.to_vec());
    }

    async fn get_product(&self, id: i32) -> Option<ProductResponse> {
        self.product.lock().unwrap().get(&id).cloned()
    }

    async fn set_product(&self, product: &ProductResponse) {
        self.product
            .lock()
            .unwrap()
            .insert(product.id, product.clone());
    }

    async fn invalidate_product(&self, id: i32) {
        self.product.lock().unwrap().remove(&id);
        *self.products.lock().unwrap() = None;
        self.invalidated.lock().unwrap().push(id);
    }
}

pub struct TestApp {
    pub router: Router,
    pub db: MemoryDb,
    pub payment: Arc<FakePayment>,
    pub kafka: Arc<FakeKafka>,
    pub cache: Arc<MemoryCache>,
    jwt: JwtConfig,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with(PaymentBehavior::Accept, FakeKafka::default())
    }

    /// Builds the full router over in-memory fakes. Needs a tokio runtime.
    pub fn with(payment: PaymentBehavior, kafka: FakeKafka) -> Self {
        let db = MemoryDb::default();
        let payment = Arc::new(FakePayment::new(payment));
        let kafka = Arc::new(kafka);
        let cache = Arc::new(MemoryCache::default());

        let deps = DependenciesInjectDeps {
            user_query: Arc::new(db.clone()),
            user_command: Arc::new(db.clone()),
            variant_query: Arc::new(db.clone()),
            discount_query: Arc::new(db.clone()),
            catalog_query: Arc::new(db.clone()),
            order_query: Arc::new(db.clone()),
            order_command: Arc::new(db.clone()),
            cart_query: Arc::new(db.clone()),
            cart_command: Arc::new(db.clone()),
            comment_query: Arc::new(db.clone()),
            comment_command: Arc::new(db.clone()),
            payment: payment.clone(),
            kafka: kafka.clone(),
            cache: cache.clone(),
            hashing: Arc::new(Hashing::new(4)),
            orders_link: ORDERS_LINK.to_string(),
            shop_url: SHOP_URL.to_string(),
        };

        let state = AppState::new(deps, JWT_SECRET);
        let router = AppRouter::build(Arc::new(state));

        Self {
            router,
            db,
            payment,
            kafka,
            cache,
            jwt: JwtConfig::new(JWT_SECRET),
        }
    }

    /// Seeds two shoppers and one phone with a 1600 variant.
    pub fn seeded() -> Self {
        let app = Self::new();
        app.seed();
        app
    }

    pub fn seed(&self) {
        self.db
            .add_user(1, "alice", "alice@example.com", Some("0901234567"));
        self.db.add_user(2, "bob", "bob@example.com", Some("0907654321"));
        self.db.add_product(1, "iPhone 15", Some((1, "Apple")));
        self.db.add_image(1, 1, "iphone-front.png");
        self.db.add_variant(1, 1, 5, 1600.0, None);

        let today = Utc::now().date_naive();
        self.db.add_discount(
            1,
            "SALE10",
            Some(10.0),
            None,
            today - Duration::days(1),
            today + Duration::days(1),
        );
        self.db.add_discount(
            2,
            "MINUS200",
            None,
            Some(200.0),
            today,
            today,
        );
        self.db.add_discount(
            3,
            "EXPIRED",
            Some(50.0),
            None,
            today - Duration::days(10),
            today - Duration::days(1),
        );
    }

    pub fn token_for(&self, user_id: i64) -> String {
        self.jwt.generate_token(user_id, "access").unwrap()
    }

    pub async fn call(
        &self,
        method: Method,
        uri: &str,
        user_id: Option<i64>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(user_id) = user_id {
            builder = builder.header(
                header::AUTHORIZATION,
                format!("Bearer {}", self.token_for(user_id)),
            );
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();

        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::String(
                String::from_utf8_lossy(&bytes).into_owned(),
            ))
        };

        (status, json)
    }
}
