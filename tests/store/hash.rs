use std::collections::HashMap;

use fake_redis::CommandError;

use crate::test_utils::TestEnv;

#[tokio::test]
async fn test_handle_hset_and_hget() {
    let env = TestEnv::new();

    env.redis.hset("hset", "field", "value").await;

    assert_eq!(env.redis.hget("hset", "field").await, Ok("value".to_string()));
    assert!(env.redis.hexists("hset", "field").await);

    env.redis.hset("hset", "field", "other").await;
    assert_eq!(env.redis.hget("hset", "field").await, Ok("other".to_string()));
}

#[tokio::test]
async fn test_handle_hget_missing_key_or_field() {
    let env = TestEnv::new();

    assert_eq!(
        env.redis.hget("invalid", "invalid").await,
        Err(CommandError::NotFound)
    );

    env.redis.hset("hset", "field", "value").await;
    assert_eq!(
        env.redis.hget("hset", "invalid").await,
        Err(CommandError::NotFound)
    );
}

#[tokio::test]
async fn test_handle_hexists() {
    let env = TestEnv::new();

    assert!(!env.redis.hexists("invalid", "invalid").await);
    assert!(!env.redis.hexists("hset", "invalid").await);

    env.redis.hset("hset", "field", "value").await;
    assert!(env.redis.hexists("hset", "field").await);
    assert!(!env.redis.hexists("hset", "invalid").await);
}

#[tokio::test]
async fn test_handle_hgetall() {
    let env = TestEnv::new();

    env.redis.hset("fruits", "grape", "1").await;
    env.redis.hset("fruits", "mango", "2").await;

    assert_eq!(
        env.redis.hgetall("fruits").await,
        HashMap::from([
            ("grape".to_string(), "1".to_string()),
            ("mango".to_string(), "2".to_string()),
        ])
    );
}

#[tokio::test]
async fn test_handle_hgetall_creates_unseen_key() {
    let env = TestEnv::new();

    assert!(env.redis.hgetall("fruits").await.is_empty());
    assert_eq!(env.redis.hlen("fruits").await, 0);
    assert!(!env.redis.hexists("fruits", "grape").await);
    assert_eq!(
        env.redis.hget("fruits", "grape").await,
        Err(CommandError::NotFound)
    );
}

#[tokio::test]
async fn test_hgetall_returns_a_copy() {
    let env = TestEnv::new();

    env.redis.hset("fruits", "grape", "1").await;

    let mut copy = env.redis.hgetall("fruits").await;
    copy.insert("grape".to_string(), "changed".to_string());
    copy.insert("mango".to_string(), "2".to_string());

    assert_eq!(env.redis.hget("fruits", "grape").await, Ok("1".to_string()));
    assert!(!env.redis.hexists("fruits", "mango").await);
}

#[tokio::test]
async fn test_handle_hincrby() {
    let env = TestEnv::new();

    assert_eq!(
        env.redis.hincrby("hincrby", "field", 1).await,
        Ok("1".to_string())
    );
    assert_eq!(
        env.redis.hincrby("hincrby", "field", 1).await,
        Ok("2".to_string())
    );
    assert_eq!(env.redis.hget("hincrby", "field").await, Ok("2".to_string()));

    assert_eq!(
        env.redis.hincrby("hincrby", "field", -5).await,
        Ok("-3".to_string())
    );
    assert_eq!(
        env.redis.hincrby("hincrby", "other", 0).await,
        Ok("0".to_string())
    );
}

#[tokio::test]
async fn test_handle_hincrby_existing_value() {
    let env = TestEnv::new();

    env.redis.hset("counters", "visits", "41").await;

    assert_eq!(
        env.redis.hincrby("counters", "visits", 1).await,
        Ok("42".to_string())
    );
}

#[tokio::test]
async fn test_handle_hincrby_invalid() {
    let env = TestEnv::new();

    let test_cases = vec![
        ("abc", 1),
        ("1.5", 1),
        ("", 1),
        (" 7", 1),
        ("99999999999999999999", 1),
        ("9223372036854775807", 1),
        ("-9223372036854775808", -1),
    ];

    for (stored_value, amount) in test_cases {
        env.redis.hset("hincrby", "field", stored_value).await;

        assert_eq!(
            env.redis.hincrby("hincrby", "field", amount).await,
            Err(CommandError::NotNumeric),
            "incrementing {:?}",
            stored_value
        );
        assert_eq!(
            env.redis.hget("hincrby", "field").await,
            Ok(stored_value.to_string()),
            "value {:?} should be left untouched",
            stored_value
        );
    }
}

#[tokio::test]
async fn test_handle_hdel_and_hlen() {
    let env = TestEnv::new();

    env.redis.hset("fruits", "grape", "1").await;
    env.redis.hset("fruits", "mango", "2").await;
    assert_eq!(env.redis.hlen("fruits").await, 2);

    assert!(env.redis.hdel("fruits", "grape").await);
    assert!(!env.redis.hdel("fruits", "grape").await);
    assert_eq!(env.redis.hlen("fruits").await, 1);
    assert!(!env.redis.hexists("fruits", "grape").await);

    assert!(env.redis.hdel("fruits", "mango").await);
    assert_eq!(env.redis.hlen("fruits").await, 0);
    assert!(env.redis.hgetall("fruits").await.is_empty());
    assert_eq!(
        env.redis.hget("fruits", "mango").await,
        Err(CommandError::NotFound)
    );

    assert!(!env.redis.hdel("unseen", "grape").await);
}

#[tokio::test]
async fn test_hash_keys_do_not_collide_with_list_keys() -> anyhow::Result<()> {
    let env = TestEnv::new();

    env.redis.hset("shared", "field", "value").await;
    env.redis.rpush("shared", "item").await;

    assert_eq!(env.redis.hget("shared", "field").await?, "value");
    assert_eq!(env.redis.lpop("shared").await?, "item");
    assert_eq!(env.redis.hget("shared", "field").await?, "value");

    Ok(())
}
