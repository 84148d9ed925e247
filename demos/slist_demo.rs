use slinked_collections::linked_list::singly::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    let mut list = SinglyLinkedList::new();
    for value in [5, 1, 3, 10, 15] {
        list.add_node(value);
    }
    list.remove_at_end()?;

    println!("{}", list);
    Ok(())
}
