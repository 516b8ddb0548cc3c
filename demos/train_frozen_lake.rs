use qgrid::{
    algo::tabular::{QTableAgent, QTableAgentConfig},
    gym::FrozenLake,
};

const NUM_EPISODES: u32 = 1000;

fn main() {
    env_logger::init();

    let mut env = FrozenLake::new();
    println!("{env}");

    let mut agent = QTableAgent::new(&env, QTableAgentConfig::default());
    println!("Q-table before training:\n{}", agent.q_table());

    let outcomes = agent.train(&mut env, NUM_EPISODES);

    println!("Q-table after training:\n{}", agent.q_table());

    let successes = outcomes.iter().filter(|o| o.is_success()).count();
    println!("{successes}/{NUM_EPISODES} successful episodes");
}
