mod nav;
mod simulator;
mod staking;
mod wallet;
