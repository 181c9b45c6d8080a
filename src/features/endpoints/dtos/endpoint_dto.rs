use serde::ser::{Serialize, Serializer};
use serde_json::{json, Value};
use utoipa::ToSchema;

/// Documentation for a single route
#[derive(Debug, Clone, serde::Serialize)]
pub struct EndpointDoc {
    pub description: &'static str,
    #[serde(skip_serializing_if = "no_queries")]
    pub queries: &'static [&'static str],
    #[serde(rename = "exampleRequest", skip_serializing_if = "Option::is_none")]
    pub example_request: Option<Value>,
    #[serde(rename = "exampleResponse", skip_serializing_if = "Option::is_none")]
    pub example_response: Option<Value>,
}

fn no_queries(queries: &&'static [&'static str]) -> bool {
    queries.is_empty()
}

/// Routes keyed by `"<METHOD> <path>"`, serialized as a JSON object that
/// keeps insertion order.
#[derive(Debug, Clone, Default)]
pub struct EndpointCatalog {
    entries: Vec<(&'static str, EndpointDoc)>,
}

impl EndpointCatalog {
    pub fn with(mut self, route: &'static str, doc: EndpointDoc) -> Self {
        self.entries.push((route, doc));
        self
    }
}

impl Serialize for EndpointCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(route, doc)| (*route, doc)))
    }
}

#[derive(Debug, serde::Serialize, ToSchema)]
pub struct EndpointsResponse {
    #[schema(value_type = Object)]
    pub endpoints: EndpointCatalog,
}

fn example_review() -> Value {
    json!({
        "review_id": 1,
        "title": "One Night Ultimate Werewolf",
        "designer": "Akihisa Okui",
        "owner": "happyamy2016",
        "review_body": "We couldn't find the werewolf!",
        "review_img_url": "https://images.pexels.com/photos/5350049/pexels-photo-5350049.jpeg?w=700&h=700",
        "category": "hidden-roles",
        "created_at": "2018-05-30T15:59:13.341Z",
        "votes": 0,
        "comment_count": "6"
    })
}

fn example_comment() -> Value {
    json!({
        "comment_id": 7,
        "review_id": 5,
        "author": "philippaclaire9",
        "body": "I hate this game, waste of my time",
        "votes": 0,
        "created_at": "2021-03-27T19:49:48.110Z"
    })
}

/// The public route catalog served at `GET /api`
pub fn catalog() -> EndpointCatalog {
    EndpointCatalog::default()
        .with(
            "GET /api",
            EndpointDoc {
                description: "serves a json representation of all the available endpoints of the api",
                queries: &[],
                example_request: None,
                example_response: None,
            },
        )
        .with(
            "GET /api/categories",
            EndpointDoc {
                description: "serves an array of all categories",
                queries: &[],
                example_request: None,
                example_response: Some(json!({
                    "categories": [
                        {
                            "slug": "euro game",
                            "description": "Abstact games that involve little luck"
                        }
                    ]
                })),
            },
        )
        .with(
            "GET /api/reviews",
            EndpointDoc {
                description: "serves an array of all reviews with their comment counts",
                queries: &["category", "sort_by", "order_by"],
                example_request: None,
                example_response: Some(json!({ "reviews": [example_review()] })),
            },
        )
        .with(
            "GET /api/reviews/:review_id/comments",
            EndpointDoc {
                description: "serves an array of comments for the given review, most recent first",
                queries: &[],
                example_request: None,
                example_response: Some(json!({ "comments": [example_comment()] })),
            },
        )
        .with(
            "GET /api/reviews/:review_id",
            EndpointDoc {
                description: "serves the review with the given id, including its comment count",
                queries: &[],
                example_request: None,
                example_response: Some(json!({ "review": example_review() })),
            },
        )
        .with(
            "GET /api/users",
            EndpointDoc {
                description: "serves an array of all users",
                queries: &[],
                example_request: None,
                example_response: Some(json!({
                    "users": [
                        {
                            "username": "mallionaire",
                            "name": "haz",
                            "avatar_url": "https://www.healthytherapies.com/wp-content/uploads/2016/06/Lime3.jpg"
                        }
                    ]
                })),
            },
        )
        .with(
            "POST /api/reviews/:review_id/comments",
            EndpointDoc {
                description: "adds a comment to the given review and serves the new comment",
                queries: &[],
                example_request: Some(json!({
                    "username": "philippaclaire9",
                    "body": "I hate this game, waste of my time"
                })),
                example_response: Some(json!({ "comment": example_comment() })),
            },
        )
        .with(
            "PATCH /api/reviews/:review_id",
            EndpointDoc {
                description: "adds inc_votes to the review's votes and serves the updated review",
                queries: &[],
                example_request: Some(json!({ "inc_votes": 1 })),
                example_response: Some(json!({ "updatedReview": example_review() })),
            },
        )
        .with(
            "DELETE /api/comments/:comment_id",
            EndpointDoc {
                description: "deletes the given comment and serves no content",
                queries: &[],
                example_request: None,
                example_response: None,
            },
        )
}
