use super::{Account, AccountId, Username};

/// The ordered list of every open account.
///
/// Usernames are expected to be unique, but nothing enforces it: lookups
/// return the first match, like a teller going down the list.
#[derive(Debug, Default)]
pub struct AccountStore {
    accounts: Vec<Account>,
    next_id: u32,
}

impl AccountStore {
    pub fn new(accounts: Vec<Account>) -> Self {
        let mut store = Self::default();
        for account in accounts {
            store.insert(account);
        }
        store
    }

    /// Add an account at the end of the list, and give it its id.
    pub fn insert(&mut self, mut account: Account) -> AccountId {
        self.next_id += 1;
        account.id = AccountId(self.next_id);
        self.accounts.push(account);

        AccountId(self.next_id)
    }

    pub fn find(&self, username: &Username) -> Option<&Account> {
        self.accounts.iter().find(|acc| acc.username == username)
    }

    /// Where the account stands in the list.
    pub fn index_of(&self, id: AccountId) -> Option<usize> {
        self.accounts.iter().position(|acc| acc.id == id)
    }

    pub fn get(&self, id: AccountId) -> Option<&Account> {
        self.accounts.iter().find(|acc| acc.id == id)
    }

    pub fn get_mut(&mut self, id: AccountId) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|acc| acc.id == id)
    }

    /// Two distinct accounts, borrowed mutably at the same time.
    /// Returns `None` if either is missing, or if both ids are the same.
    pub fn get_pair_mut(
        &mut self,
        first: AccountId,
        second: AccountId,
    ) -> Option<(&mut Account, &mut Account)> {
        if first == second {
            return None;
        }

        let mut first_acc = None;
        let mut second_acc = None;
        for acc in self.accounts.iter_mut() {
            if acc.id == first {
                first_acc = Some(acc);
            } else if acc.id == second {
                second_acc = Some(acc);
            }
        }

        Some((first_acc?, second_acc?))
    }

    /// Take the account at `index` out of the store for good.
    pub fn remove(&mut self, index: usize) -> Option<Account> {
        if index < self.accounts.len() {
            Some(self.accounts.remove(index))
        } else {
            None
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
