use uuid::Uuid;

/// Time-sortable identifier (UUID v7): lexical order follows creation order.
pub fn new_id() -> String {
    Uuid::now_v7().to_string()
}
