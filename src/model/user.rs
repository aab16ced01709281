#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserInfo {
    pub user_id: String,
    pub name: String,
    pub user_url: Option<String>,
}
