use qgrid::{
    algo::tabular::{QTableAgent, QTableAgentConfig},
    gym::FrozenLake,
    viz,
};

const NUM_EPISODES: u16 = 1000;

fn main() {
    let mut env = FrozenLake::new();
    println!("{env}");

    let config = QTableAgentConfig {
        alpha: 0.5,
        gamma: 0.9,
        seed: None,
    };
    let mut agent = QTableAgent::new(&env, config);
    println!("Q-table before training:\n{}", agent.q_table());

    let (handle, tx) = viz::init(NUM_EPISODES);

    for i in 0..NUM_EPISODES {
        let outcome = agent.go(&mut env);
        tx.send(viz::Update {
            episode: i,
            outcome,
        })
        .unwrap();
    }

    let _ = handle.join();

    println!("Q-table after training:\n{}", agent.q_table());
}
