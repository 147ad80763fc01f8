use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub body: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub post_id: u64,
    pub id: u64,
    pub name: String,
    pub email: String,
    pub body: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

#[derive(Deserialize)]
pub struct UserFilter {
    pub username: Option<String>,
}

/// In-memory copy of the API's data. Users are stored as the JSON documents
/// clients sent, with `id` filled in by the server.
#[derive(Clone, Debug, Default)]
pub struct Store {
    pub users: BTreeMap<u64, Value>,
    pub posts: Vec<Post>,
    pub comments: Vec<Comment>,
    pub todos: Vec<Todo>,
}

impl Store {
    /// Two users: `Bret` (id 1) with posts 3, 7, 5 and mixed todos, and
    /// `Antonette` (id 2) with no posts and only completed todos.
    pub fn seeded() -> Self {
        let mut users = BTreeMap::new();
        users.insert(
            1,
            user_doc(1, "Leanne Graham", "Bret", "Sincere@april.biz", ("-37.3159", "81.1496")),
        );
        users.insert(
            2,
            user_doc(2, "Ervin Howell", "Antonette", "Shanna@melissa.tv", ("-43.9509", "-34.4618")),
        );

        let posts = [3, 7, 5]
            .into_iter()
            .map(|id| Post {
                user_id: 1,
                id,
                title: format!("post {id}"),
                body: format!("body of post {id}"),
            })
            .collect();

        let comments = vec![
            comment(3, 11, "Eliseo@gardner.biz"),
            comment(7, 31, "Veronica_Goodwin@timmothy.net"),
            comment(7, 32, "Oswald.Vandervort@leanne.org"),
            comment(5, 21, "Kariane@jadyn.tv"),
        ];

        let todos = vec![
            todo(1, 1, "delectus aut autem", false),
            todo(1, 2, "quis ut nam facilis", true),
            todo(1, 3, "fugiat veniam minus", false),
            todo(2, 4, "suscipit repellat esse", true),
            todo(2, 5, "distinctio vitae autem", true),
        ];

        Self {
            users,
            posts,
            comments,
            todos,
        }
    }
}

fn user_doc(id: u64, name: &str, username: &str, email: &str, (lat, lng): (&str, &str)) -> Value {
    json!({
        "id": id,
        "name": name,
        "username": username,
        "email": email,
        "address": {
            "street": "Kulas Light",
            "suite": "Apt. 556",
            "city": "Gwenborough",
            "zipcode": "92998-3874",
            "geo": { "lat": lat, "lng": lng }
        },
        "phone": "1-770-736-8031 x56442",
        "website": "hildegard.org",
        "company": {
            "name": "Romaguera-Crona",
            "catchPhrase": "Multi-layered client-server neural-net",
            "bs": "harness real-time e-markets"
        }
    })
}

fn comment(post_id: u64, id: u64, email: &str) -> Comment {
    Comment {
        post_id,
        id,
        name: format!("comment {id}"),
        email: email.to_string(),
        body: format!("comment {id} on post {post_id}"),
    }
}

fn todo(user_id: u64, id: u64, title: &str, completed: bool) -> Todo {
    Todo {
        user_id,
        id,
        title: title.to_string(),
        completed,
    }
}

pub type Db = Arc<RwLock<Store>>;

type Missing = (StatusCode, Json<Value>);

fn not_found() -> Missing {
    (StatusCode::NOT_FOUND, Json(json!({})))
}

pub fn app() -> Router {
    app_with(Store::seeded())
}

pub fn app_with(store: Store) -> Router {
    let db: Db = Arc::new(RwLock::new(store));
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", get(get_user).put(update_user).delete(delete_user))
        .route("/users/{id}/posts", get(user_posts))
        .route("/users/{id}/todos", get(user_todos))
        .route("/posts/{id}/comments", get(post_comments))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_users(State(db): State<Db>, Query(filter): Query<UserFilter>) -> Json<Vec<Value>> {
    let store = db.read().await;
    let users = store
        .users
        .values()
        .filter(|user| match &filter.username {
            Some(username) => user["username"].as_str() == Some(username.as_str()),
            None => true,
        })
        .cloned()
        .collect();
    Json(users)
}

async fn create_user(State(db): State<Db>, Json(mut input): Json<Value>) -> Result<(StatusCode, Json<Value>), Missing> {
    let Some(fields) = input.as_object_mut() else {
        return Err((StatusCode::BAD_REQUEST, Json(json!({}))));
    };
    let mut store = db.write().await;
    let id = store.users.keys().next_back().map_or(1, |last| last + 1);
    fields.insert("id".to_string(), json!(id));
    store.users.insert(id, input.clone());
    Ok((StatusCode::CREATED, Json(input)))
}

async fn get_user(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Value>, Missing> {
    let store = db.read().await;
    store.users.get(&id).cloned().map(Json).ok_or_else(not_found)
}

async fn update_user(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(mut input): Json<Value>,
) -> Result<Json<Value>, Missing> {
    let mut store = db.write().await;
    let user = store.users.get_mut(&id).ok_or_else(not_found)?;
    if let Some(fields) = input.as_object_mut() {
        fields.insert("id".to_string(), json!(id));
    }
    *user = input.clone();
    Ok(Json(input))
}

async fn delete_user(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Value>, Missing> {
    let mut store = db.write().await;
    store.users.remove(&id).map(|_| Json(json!({}))).ok_or_else(not_found)
}

async fn user_posts(State(db): State<Db>, Path(id): Path<u64>) -> Json<Vec<Post>> {
    let store = db.read().await;
    Json(store.posts.iter().filter(|p| p.user_id == id).cloned().collect())
}

async fn user_todos(State(db): State<Db>, Path(id): Path<u64>) -> Json<Vec<Todo>> {
    let store = db.read().await;
    Json(store.todos.iter().filter(|t| t.user_id == id).cloned().collect())
}

async fn post_comments(State(db): State<Db>, Path(id): Path<u64>) -> Json<Vec<Comment>> {
    let store = db.read().await;
    Json(store.comments.iter().filter(|c| c.post_id == id).cloned().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_store_has_expected_shape() {
        let store = Store::seeded();
        assert_eq!(store.users.len(), 2);
        assert_eq!(store.users[&1]["username"], "Bret");
        let bret_posts: Vec<u64> = store.posts.iter().filter(|p| p.user_id == 1).map(|p| p.id).collect();
        assert_eq!(bret_posts, vec![3, 7, 5]);
        assert!(store.posts.iter().all(|p| p.user_id != 2));
        assert!(store.todos.iter().filter(|t| t.user_id == 2).all(|t| t.completed));
    }

    #[test]
    fn post_serializes_camel_case() {
        let post = Post {
            user_id: 1,
            id: 7,
            title: "t".to_string(),
            body: "b".to_string(),
        };
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["userId"], 1);
        assert_eq!(json["id"], 7);
    }

    #[test]
    fn todo_requires_completed() {
        let result: Result<Todo, _> = serde_json::from_str(r#"{"userId":1,"id":1,"title":"x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn user_filter_username_optional() {
        let filter: UserFilter = serde_json::from_str("{}").unwrap();
        assert!(filter.username.is_none());
    }
}
