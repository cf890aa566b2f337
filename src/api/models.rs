use serde::Deserialize;

/// Employer attached to a user record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Company {
    pub name: String,
    #[serde(rename = "catchPhrase")]
    pub catch_phrase: String,
}

/// A user ("employee") as returned by the remote service. Unknown wire
/// fields (address, phone, website) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub company: Company,
}

/// A post owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Post {
    pub id: u64,
    #[serde(rename = "userId")]
    pub user_id: u64,
    pub title: String,
    pub body: String,
}

/// A comment on a post.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Comment {
    pub id: u64,
    #[serde(rename = "postId")]
    pub post_id: u64,
    pub name: String,
    pub email: String,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_parsing_with_company() {
        let json = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": { "street": "Kulas Light", "city": "Gwenborough" },
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org",
            "company": {
                "name": "Romaguera-Crona",
                "catchPhrase": "Multi-layered client-server neural-net",
                "bs": "harness real-time e-markets"
            }
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.name, "Leanne Graham");
        assert_eq!(user.company.name, "Romaguera-Crona");
        assert_eq!(
            user.company.catch_phrase,
            "Multi-layered client-server neural-net"
        );
    }

    #[test]
    fn test_post_owner_field_is_camel_case_on_the_wire() {
        let json = r#"{
            "userId": 3,
            "id": 21,
            "title": "asperiores ea ipsam",
            "body": "repellat aliquid praesentium"
        }"#;

        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.user_id, 3);
        assert_eq!(post.id, 21);
    }

    #[test]
    fn test_comment_parsing() {
        let json = r#"{
            "postId": 21,
            "id": 101,
            "name": "perferendis",
            "email": "Lew@alysha.tv",
            "body": "maiores sed dolores"
        }"#;

        let comment: Comment = serde_json::from_str(json).unwrap();
        assert_eq!(comment.post_id, 21);
        assert_eq!(comment.email, "Lew@alysha.tv");
    }
}
