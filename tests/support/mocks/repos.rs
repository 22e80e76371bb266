// tests/support/mocks/repos.rs
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicI64, Ordering},
};

use pulsefeed::domain::errors::{DomainError, DomainResult};
use pulsefeed::domain::feed::{
    EntryAuthor, FeedEntry, FeedEntryId, FeedEntryWithAuthor, FeedReadRepository,
    FeedWriteRepository, NewFeedEntry, VoteUpdate,
};
use pulsefeed::domain::user::{NewUser, User, UserId, UserRepository, Username};

/* -------------------------------- InMemoryUserRepo -------------------------------- */

/// 軽量なインメモリ認証情報ストア
/// ユニーク制約（username）をストア側で再現する
pub struct InMemoryUserRepo {
    users: Mutex<HashMap<i64, User>>,
    next_id: AtomicI64,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();

        if users
            .values()
            .any(|u| u.username.as_str() == new_user.username.as_str())
        {
            return Err(DomainError::Conflict("username already exists".into()));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let user = User {
            id: UserId::new(id)?,
            fname: new_user.fname,
            lname: new_user.lname,
            username: new_user.username,
            password_hash: new_user.password_hash,
            created_at: new_user.created_at,
            updated_at: new_user.created_at,
        };
        users.insert(id, user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users
            .values()
            .find(|u| u.username.as_str() == username.as_str())
            .cloned())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.get(&i64::from(id)).cloned())
    }
}

/* -------------------------------- InMemoryFeedStore -------------------------------- */

/// 軽量なインメモリフィードストア（読み書き両方のトレイトを実装）
/// 作成時の著者参照チェックで外部キー制約を再現する
pub struct InMemoryFeedStore {
    entries: Mutex<HashMap<i64, FeedEntry>>,
    next_id: AtomicI64,
    users: Arc<InMemoryUserRepo>,
}

impl InMemoryFeedStore {
    pub fn new(users: Arc<InMemoryUserRepo>) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
            users,
        }
    }

    fn author_of(&self, entry: &FeedEntry) -> DomainResult<EntryAuthor> {
        let users = self.users.users.lock().unwrap();
        let user = users
            .get(&i64::from(entry.author_id))
            .ok_or_else(|| DomainError::NotFound("author not found".into()))?;
        Ok(EntryAuthor {
            id: user.id,
            username: user.username.clone(),
            fname: user.fname.as_str().to_string(),
            lname: user.lname.as_str().to_string(),
        })
    }
}

#[async_trait]
impl FeedWriteRepository for InMemoryFeedStore {
    async fn insert(&self, entry: NewFeedEntry) -> DomainResult<FeedEntry> {
        if self.users.find_by_id(entry.author_id).await?.is_none() {
            return Err(DomainError::NotFound("author not found".into()));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let stored = FeedEntry {
            id: FeedEntryId::new(id)?,
            author_id: entry.author_id,
            content: entry.content,
            upvote_count: entry.upvote_count,
            downvote_count: entry.downvote_count,
            created_at: entry.created_at,
            updated_at: entry.created_at,
        };
        self.entries.lock().unwrap().insert(id, stored.clone());
        Ok(stored)
    }

    async fn set_votes(&self, update: VoteUpdate) -> DomainResult<FeedEntry> {
        let mut entries = self.entries.lock().unwrap();
        let entry = entries
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("feed entry not found".into()))?;

        entry.set_votes(update.upvote_count, update.downvote_count, update.updated_at);
        Ok(entry.clone())
    }
}

#[async_trait]
impl FeedReadRepository for InMemoryFeedStore {
    async fn find_with_author(&self, id: FeedEntryId) -> DomainResult<Option<FeedEntryWithAuthor>> {
        let entry = {
            let entries = self.entries.lock().unwrap();
            entries.get(&i64::from(id)).cloned()
        };

        match entry {
            Some(entry) => {
                let author = self.author_of(&entry)?;
                Ok(Some(FeedEntryWithAuthor { entry, author }))
            }
            None => Ok(None),
        }
    }

    async fn list_newest_first(&self) -> DomainResult<Vec<FeedEntryWithAuthor>> {
        let mut entries: Vec<FeedEntry> = {
            let entries = self.entries.lock().unwrap();
            entries.values().cloned().collect()
        };
        entries.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| i64::from(b.id).cmp(&i64::from(a.id)))
        });

        entries
            .into_iter()
            .map(|entry| {
                let author = self.author_of(&entry)?;
                Ok(FeedEntryWithAuthor { entry, author })
            })
            .collect()
    }
}
