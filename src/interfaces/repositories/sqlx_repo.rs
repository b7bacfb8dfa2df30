use sqlx::PgPool;

#[derive(Clone)]
pub struct SqlxUserRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxProfileRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxCatalogRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxProjectRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxTaskRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxEngagementRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxRatingRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxNotificationRepo {
    pub pool: PgPool,
}
