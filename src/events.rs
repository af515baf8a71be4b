use soroban_sdk::{symbol_short, Address, BytesN, Env};

pub fn claimed(env: &Env, account: &Address, amount: i128) {
    let topics = (symbol_short!("claimed"), account.clone());
    env.events().publish(topics, amount);
}

pub fn root_set(env: &Env, root: &BytesN<32>) {
    env.events().publish((symbol_short!("root_set"),), root.clone());
}

pub fn start_set(env: &Env, start: u64) {
    env.events().publish((symbol_short!("start_set"),), start);
}

pub fn end_set(env: &Env, end: u64) {
    env.events().publish((symbol_short!("end_set"),), end);
}

pub fn reclaimed(env: &Env, owner: &Address, amount: i128) {
    let topics = (symbol_short!("reclaim"), owner.clone());
    env.events().publish(topics, amount);
}

pub fn funded(env: &Env, from: &Address, amount: i128) {
    let topics = (symbol_short!("funded"), from.clone());
    env.events().publish(topics, amount);
}

pub fn owner_set(env: &Env, previous: &Address, owner: &Address) {
    let topics = (symbol_short!("owner_set"), previous.clone());
    env.events().publish(topics, owner.clone());
}
