#![allow(dead_code)]

use std::{net::TcpListener, sync::Arc, time::Duration};

use news_api::{init_db, make_router, serve, Config, NewsStore};
use serde_json::Value;
use sqlx::{Executor, SqlitePool};

const SEED: &str = r#"
INSERT INTO topics (slug, description) VALUES
    ('mitch', 'The man, the Mitch, the legend'),
    ('cats', 'Not dogs'),
    ('paper', 'what books are made of');

INSERT INTO users (username, name, avatar_url) VALUES
    ('butter_bridge', 'jonny', 'https://www.healthytherapies.com/wp-content/uploads/2016/06/Lime3.jpg'),
    ('icellusedkars', 'sam', 'https://avatars2.githubusercontent.com/u/24604688?s=460&v=4'),
    ('rogersop', 'paul', 'https://avatars2.githubusercontent.com/u/24394918?s=400&v=4'),
    ('lurker', 'do_nothing', 'https://www.golenbock.com/wp-content/uploads/2015/01/placeholder-user.png');

INSERT INTO articles (article_id, title, topic, author, body, created_at, votes, article_img_url) VALUES
    (1, 'Living in the shadow of a great man', 'mitch', 'butter_bridge', 'I find this existence challenging', '2020-07-09T20:11:00Z', 100, 'https://images.pexels.com/photos/158651/news-newsletter-newspaper-information-158651.jpeg?w=700&h=700'),
    (2, 'Sony Vaio; or, The Laptop', 'mitch', 'icellusedkars', 'Call me Mitchell. Some years ago I thought I would buy a laptop.', '2020-10-16T05:03:00Z', 0, 'https://images.pexels.com/photos/158651/news-newsletter-newspaper-information-158651.jpeg?w=700&h=700'),
    (3, 'Eight pug gifs that remind me of mitch', 'mitch', 'icellusedkars', 'some gifs', '2020-11-03T09:12:00Z', 0, 'https://images.pexels.com/photos/158651/news-newsletter-newspaper-information-158651.jpeg?w=700&h=700'),
    (4, 'Student SUES Mitch!', 'mitch', 'rogersop', 'We all love Mitch and his wonderful, unique typing style.', '2020-05-06T01:14:00Z', 0, 'https://images.pexels.com/photos/158651/news-newsletter-newspaper-information-158651.jpeg?w=700&h=700'),
    (5, 'UNCOVERED: catspiracy to bring down democracy', 'cats', 'rogersop', 'Bastet walks amongst us, and the cats are taking arms!', '2020-08-03T13:14:00Z', 0, 'https://images.pexels.com/photos/158651/news-newsletter-newspaper-information-158651.jpeg?w=700&h=700'),
    (6, 'A', 'mitch', 'icellusedkars', 'Delicious tin of cat food', '2020-10-18T01:00:00Z', 0, 'https://images.pexels.com/photos/158651/news-newsletter-newspaper-information-158651.jpeg?w=700&h=700'),
    (7, 'Z', 'mitch', 'icellusedkars', 'I was hungry.', '2020-01-07T14:08:00Z', 0, 'https://images.pexels.com/photos/158651/news-newsletter-newspaper-information-158651.jpeg?w=700&h=700'),
    (8, 'Does Mitch predate civilisation?', 'mitch', 'icellusedkars', 'Archaeologists have uncovered a gigantic statue from the dawn of humanity.', '2020-04-17T01:08:00Z', 0, 'https://images.pexels.com/photos/158651/news-newsletter-newspaper-information-158651.jpeg?w=700&h=700'),
    (9, 'They are not exactly dogs, are they?', 'mitch', 'butter_bridge', 'Well? Think about it.', '2020-06-06T09:10:00Z', 0, 'https://images.pexels.com/photos/158651/news-newsletter-newspaper-information-158651.jpeg?w=700&h=700'),
    (10, 'Seven inspirational thought leaders from Manchester UK', 'mitch', 'rogersop', 'Who are we kidding, there is only one, and it is Mitch!', '2020-05-14T04:15:00Z', 0, 'https://images.pexels.com/photos/158651/news-newsletter-newspaper-information-158651.jpeg?w=700&h=700'),
    (11, 'Am I a cat?', 'mitch', 'icellusedkars', 'Having run out of ideas for articles, I am staring at the wall blankly, like a cat.', '2020-01-15T22:21:00Z', 0, 'https://images.pexels.com/photos/158651/news-newsletter-newspaper-information-158651.jpeg?w=700&h=700'),
    (12, 'Moustache', 'mitch', 'butter_bridge', 'Have you seen the size of that thing?', '2020-10-11T11:24:00Z', 0, 'https://images.pexels.com/photos/158651/news-newsletter-newspaper-information-158651.jpeg?w=700&h=700'),
    (13, 'Another article about Mitch', 'mitch', 'butter_bridge', 'There will never be enough articles about Mitch!', '2020-10-11T11:24:00Z', 0, 'https://images.pexels.com/photos/158651/news-newsletter-newspaper-information-158651.jpeg?w=700&h=700');

INSERT INTO comments (comment_id, article_id, author, body, votes, created_at) VALUES
    (1, 9, 'butter_bridge', 'Oh, I have got compassion running out of my nose, pal!', 16, '2020-04-06T12:17:00Z'),
    (2, 1, 'butter_bridge', 'The beautiful thing about treasure is that it exists.', 14, '2020-10-31T03:03:00Z'),
    (3, 1, 'icellusedkars', 'Replacing the quiet elegance of the dark suit and tie is a form of fashion suicide.', 100, '2020-03-01T01:13:00Z'),
    (4, 1, 'icellusedkars', 'I carry a log. Is it funny to you? It is not to me.', -100, '2020-02-23T12:01:00Z'),
    (5, 1, 'icellusedkars', 'I hate streaming noses', 0, '2020-11-03T21:00:00Z'),
    (6, 1, 'icellusedkars', 'I hate streaming eyes even more', 0, '2020-04-11T21:02:00Z'),
    (7, 1, 'icellusedkars', 'Lobster pot', 0, '2020-05-15T20:19:00Z'),
    (8, 1, 'icellusedkars', 'Delicious crackerbreads', 0, '2020-04-14T20:19:00Z'),
    (9, 1, 'icellusedkars', 'Superficially charming', 0, '2020-01-01T03:08:00Z'),
    (10, 3, 'icellusedkars', 'git push origin master', 0, '2020-06-20T07:24:00Z'),
    (11, 3, 'icellusedkars', 'Ambidextrous marsupial', 0, '2020-09-19T23:10:00Z'),
    (12, 1, 'icellusedkars', 'Massive intercranial brain haemorrhage', 0, '2020-03-02T07:10:00Z'),
    (13, 1, 'icellusedkars', 'Fruit pastilles', 0, '2020-06-15T10:25:00Z'),
    (14, 5, 'icellusedkars', 'This place I speak of is known as the Black Lodge.', 16, '2020-06-09T05:00:00Z'),
    (15, 5, 'butter_bridge', 'I am 100% sure that we are not completely sure.', 1, '2020-11-24T00:08:00Z'),
    (16, 6, 'butter_bridge', 'This is a bad article name', 1, '2020-10-11T15:23:00Z'),
    (17, 9, 'icellusedkars', 'The owls are not what they seem.', 20, '2020-03-14T17:02:00Z'),
    (18, 1, 'butter_bridge', 'This morning, I showered for nine minutes.', 16, '2020-07-21T00:20:00Z');
"#;

pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client.get(self.url(path)).send().await.unwrap()
    }

    /// GET that must succeed, returning the decoded body.
    pub async fn get_ok(&self, path: &str) -> Value {
        let response = self.get(path).await;
        assert_eq!(response.status().as_u16(), 200, "GET {path}");
        response.json().await.unwrap()
    }
}

pub fn test_config() -> Config {
    Config::from_lookup(|key| match key {
        "DATABASE_URL" => Some("sqlite::memory:".to_owned()),
        "REQUEST_TIMEOUT_SECS" => Some("5".to_owned()),
        _ => None,
    })
    .unwrap()
}

pub async fn seeded_pool() -> SqlitePool {
    let pool = init_db(&test_config()).await.unwrap();
    pool.execute(SEED).await.unwrap();
    pool
}

/// Spawns the real router over a freshly seeded in-memory database.
pub async fn spawn_app() -> TestApp {
    let pool = seeded_pool().await;
    spawn_with_store(Arc::new(pool), test_config().request_timeout).await
}

pub async fn spawn_with_store(store: Arc<dyn NewsStore>, request_timeout: Duration) -> TestApp {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let address = format!("http://{}", listener.local_addr().unwrap());
    let router = make_router(store, request_timeout);
    tokio::spawn(serve(listener, router));
    TestApp {
        address,
        client: reqwest::Client::new(),
    }
}

pub async fn assert_error(response: reqwest::Response, status: u16, msg: &str) {
    assert_eq!(response.status().as_u16(), status);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "msg": msg }));
}

/// Asserts `items` is ordered on `key` without assuming any tie-break.
pub fn assert_sorted_by(items: &[Value], key: &str, descending: bool) {
    for pair in items.windows(2) {
        let (a, b) = (&pair[0][key], &pair[1][key]);
        let ordered = match (a.as_i64(), b.as_i64()) {
            (Some(a), Some(b)) if descending => a >= b,
            (Some(a), Some(b)) => a <= b,
            _ => {
                let (a, b) = (a.as_str().unwrap(), b.as_str().unwrap());
                if descending {
                    a >= b
                } else {
                    a <= b
                }
            }
        };
        assert!(ordered, "{key} out of order: {a} then {b}");
    }
}
