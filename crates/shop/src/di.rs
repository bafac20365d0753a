use crate::{
    abstract_trait::{
        cache::DynCatalogCache,
        cart::{
            repository::{DynCartCommandRepository, DynCartQueryRepository},
            service::{DynCartCommandService, DynCartQueryService},
        },
        catalog::{DynCatalogQueryRepository, DynCatalogQueryService},
        comment::{
            repository::{DynCommentCommandRepository, DynCommentQueryRepository},
            service::{DynCommentCommandService, DynCommentQueryService},
        },
        discount::DynDiscountQueryRepository,
        order::{
            repository::{DynOrderCommandRepository, DynOrderQueryRepository},
            service::{DynOrderCommandService, DynOrderQueryService},
        },
        payment::DynPaymentGateway,
        user::{
            repository::{DynUserCommandRepository, DynUserQueryRepository},
            service::{DynUserCommandService, DynUserQueryService},
        },
        variant::DynVariantQueryRepository,
    },
    repository::{
        CartCommandRepository, CartQueryRepository, CatalogQueryRepository,
        CommentCommandRepository, CommentQueryRepository, DiscountQueryRepository,
        OrderCommandRepository, OrderQueryRepository, UserCommandRepository, UserQueryRepository,
        VariantQueryRepository,
    },
    service::{
        CartCommandService, CartCommandServiceDeps, CartQueryService, CartQueryServiceDeps,
        CatalogQueryService, CatalogQueryServiceDeps, CommentCommandService,
        CommentCommandServiceDeps, CommentQueryService, CommentQueryServiceDeps,
        OrderCommandService, OrderCommandServiceDeps, OrderQueryService, OrderQueryServiceDeps,
        UserCommandService, UserCommandServiceDeps, UserQueryService, UserQueryServiceDeps,
    },
};
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::{DynHashing, DynKafka},
    config::ConnectionPool,
};
use std::{fmt, sync::Arc};

/// Everything the services need from the outside world.
#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub user_query: DynUserQueryRepository,
    pub user_command: DynUserCommandRepository,
    pub variant_query: DynVariantQueryRepository,
    pub discount_query: DynDiscountQueryRepository,
    pub catalog_query: DynCatalogQueryRepository,
    pub order_query: DynOrderQueryRepository,
    pub order_command: DynOrderCommandRepository,
    pub cart_query: DynCartQueryRepository,
    pub cart_command: DynCartCommandRepository,
    pub comment_query: DynCommentQueryRepository,
    pub comment_command: DynCommentCommandRepository,
    pub payment: DynPaymentGateway,
    pub kafka: DynKafka,
    pub cache: DynCatalogCache,
    pub hashing: DynHashing,
    pub orders_link: String,
    pub shop_url: String,
}

impl DependenciesInjectDeps {
    /// Wires the postgres repositories around one shared pool.
    pub fn from_pool(
        pool: ConnectionPool,
        payment: DynPaymentGateway,
        kafka: DynKafka,
        cache: DynCatalogCache,
        hashing: DynHashing,
        orders_link: String,
        shop_url: String,
    ) -> Self {
        Self {
            user_query: Arc::new(UserQueryRepository::new(pool.clone())),
            user_command: Arc::new(UserCommandRepository::new(pool.clone())),
            variant_query: Arc::new(VariantQueryRepository::new(pool.clone())),
            discount_query: Arc::new(DiscountQueryRepository::new(pool.clone())),
            catalog_query: Arc::new(CatalogQueryRepository::new(pool.clone())),
            order_query: Arc::new(OrderQueryRepository::new(pool.clone())),
            order_command: Arc::new(OrderCommandRepository::new(pool.clone())),
            cart_query: Arc::new(CartQueryRepository::new(pool.clone())),
            cart_command: Arc::new(CartCommandRepository::new(pool.clone())),
            comment_query: Arc::new(CommentQueryRepository::new(pool.clone())),
            comment_command: Arc::new(CommentCommandRepository::new(pool)),
            payment,
            kafka,
            cache,
            hashing,
            orders_link,
            shop_url,
        }
    }
}

#[derive(Clone)]
pub struct DependenciesInject {
    pub order_command: DynOrderCommandService,
    pub order_query: DynOrderQueryService,
    pub cart_command: DynCartCommandService,
    pub cart_query: DynCartQueryService,
    pub catalog_query: DynCatalogQueryService,
    pub comment_command: DynCommentCommandService,
    pub comment_query: DynCommentQueryService,
    pub user_command: DynUserCommandService,
    pub user_query: DynUserQueryService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("order_command", &"OrderCommandService")
            .field("order_query", &"OrderQueryService")
            .field("cart_command", &"CartCommandService")
            .field("cart_query", &"CartQueryService")
            .field("catalog_query", &"CatalogQueryService")
            .field("comment_command", &"CommentCommandService")
            .field("comment_query", &"CommentQueryService")
            .field("user_command", &"UserCommandService")
            .field("user_query", &"UserQueryService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps, registry: &mut Registry) -> Self {
        let DependenciesInjectDeps {
            user_query,
            user_command,
            variant_query,
            discount_query,
            catalog_query,
            order_query,
            order_command,
            cart_query,
            cart_command,
            comment_query,
            comment_command,
            payment,
            kafka,
            cache,
            hashing,
            orders_link,
            shop_url,
        } = deps;

        let order_command_service = OrderCommandService::new(
            OrderCommandServiceDeps {
                user_query: user_query.clone(),
                variant_query: variant_query.clone(),
                discount_query,
                command: order_command,
                payment,
                kafka: kafka.clone(),
                cache: cache.clone(),
                orders_link,
            },
            registry,
        );

        let order_query_service =
            OrderQueryService::new(OrderQueryServiceDeps { query: order_query }, registry);

        let cart_command_service = CartCommandService::new(
            CartCommandServiceDeps {
                query: cart_query.clone(),
                command: cart_command.clone(),
                variant_query: variant_query.clone(),
            },
            registry,
        );

        let cart_query_service = CartQueryService::new(
            CartQueryServiceDeps {
                query: cart_query,
                command: cart_command,
            },
            registry,
        );

        let catalog_query_service = CatalogQueryService::new(
            CatalogQueryServiceDeps {
                query: catalog_query,
                variant_query: variant_query.clone(),
                cache,
            },
            registry,
        );

        let comment_command_service = CommentCommandService::new(
            CommentCommandServiceDeps {
                query: comment_query.clone(),
                command: comment_command,
                variant_query,
            },
            registry,
        );

        let comment_query_service = CommentQueryService::new(
            CommentQueryServiceDeps {
                query: comment_query,
            },
            registry,
        );

        let user_command_service = UserCommandService::new(
            UserCommandServiceDeps {
                command: user_command,
                hashing,
                kafka,
                shop_url,
            },
            registry,
        );

        let user_query_service =
            UserQueryService::new(UserQueryServiceDeps { query: user_query }, registry);

        Self {
            order_command: Arc::new(order_command_service),
            order_query: Arc::new(order_query_service),
            cart_command: Arc::new(cart_command_service),
            cart_query: Arc::new(cart_query_service),
            catalog_query: Arc::new(catalog_query_service),
            comment_command: Arc::new(comment_command_service),
            comment_query: Arc::new(comment_query_service),
            user_command: Arc::new(user_command_service),
            user_query: Arc::new(user_query_service),
        }
    }
}
